use loan_quote_core::Quote;

/// Pretty-print the quote as JSON to stdout.
///
/// Decimal fields serialise as strings, keeping the exact scale.
pub fn print_json(quote: &Quote) {
    match serde_json::to_string_pretty(quote) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
