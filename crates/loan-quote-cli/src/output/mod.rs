pub mod csv_out;
pub mod json;
pub mod table;
pub mod text;

use crate::OutputFormat;
use loan_quote_core::Quote;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, quote: &Quote) {
    match format {
        OutputFormat::Text => text::print_text(quote),
        OutputFormat::Json => json::print_json(quote),
        OutputFormat::Table => table::print_table(quote),
        OutputFormat::Csv => csv_out::print_csv(quote),
    }
}
