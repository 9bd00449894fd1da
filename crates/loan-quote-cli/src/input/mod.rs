pub mod market_csv;
pub mod stdin;

use loan_quote_core::Market;

/// Load a market from a file path, or from piped stdin when the path is '-'.
pub fn load_market(path: &str) -> Result<Market, Box<dyn std::error::Error>> {
    if path == "-" {
        stdin::read_market_from_stdin()
    } else {
        market_csv::read_market_file(path)
    }
}
