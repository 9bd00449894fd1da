use loan_quote_core::{Lender, Market, Money, Rate};
use std::fs;
use std::io;
use std::path::Path;

/// Read a market CSV file and deserialise into a [`Market`].
pub fn read_market_file(path: &str) -> Result<Market, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let file = fs::File::open(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    parse_market(file)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e).into())
}

/// Parse lender records from CSV with a header row.
///
/// Columns are positional (name, rate, amount); the header line is skipped
/// rather than matched by name, so any header text is accepted.
pub fn parse_market(reader: impl io::Read) -> Result<Market, Box<dyn std::error::Error>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut lenders = Vec::new();
    for record in csv_reader.deserialize() {
        let (name, rate, amount): (String, Rate, Money) = record?;
        lenders.push(Lender { name, rate, amount });
    }
    Ok(Market::new(lenders))
}

/// Resolve and validate the path, preventing reads of non-files.
fn resolve_path(path: &str) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
