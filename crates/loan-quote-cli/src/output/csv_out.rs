use loan_quote_core::Quote;
use std::io;

/// Write the quote as a header plus one CSV row to stdout.
pub fn print_csv(quote: &Quote) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record([
        "requested_amount",
        "rate_percent",
        "monthly_payment",
        "total_repayment",
    ]);
    let _ = wtr.write_record([
        quote.requested_amount.to_string(),
        quote.rate_percent.to_string(),
        quote.monthly_payment.to_string(),
        quote.total_repayment.to_string(),
    ]);

    let _ = wtr.flush();
}
