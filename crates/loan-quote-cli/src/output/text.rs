use loan_quote_core::Quote;

/// Print the classic four-line quote summary.
pub fn print_text(quote: &Quote) {
    println!("Requested amount: £{}", quote.requested_amount);
    println!("Rate: {}", quote.rate_percent);
    println!("Monthly repayment: {}", quote.monthly_payment);
    println!("Total repayment: {}", quote.total_repayment);
}
