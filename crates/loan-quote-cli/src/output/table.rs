use loan_quote_core::Quote;
use tabled::{builder::Builder, Table};

/// Format the quote as a two-column table using the tabled crate.
pub fn print_table(quote: &Quote) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["requested_amount", &quote.requested_amount.to_string()]);
    builder.push_record(["rate_percent", &quote.rate_percent.to_string()]);
    builder.push_record(["monthly_payment", &quote.monthly_payment.to_string()]);
    builder.push_record(["total_repayment", &quote.total_repayment.to_string()]);

    let table = Table::from(builder);
    println!("{}", table);
}
