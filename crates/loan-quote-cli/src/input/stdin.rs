use loan_quote_core::Market;
use std::io::{self, Read};

/// Read a market CSV from stdin when data is being piped.
/// Rejects an interactive (TTY) stdin.
pub fn read_market_from_stdin() -> Result<Market, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Err("no market data piped to stdin (pass a file path instead of '-')".into());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("stdin was empty".into());
    }

    super::market_csv::parse_market(trimmed.as_bytes())
}
