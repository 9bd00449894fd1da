mod input;
mod output;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::process;

use loan_quote_core::{LoanQuoteError, QuoteCalculator};

/// Blended-rate loan quotes from a market of lenders
#[derive(Parser)]
#[command(
    name = "quote",
    version,
    about = "Blended-rate loan quotes from a market of lenders",
    long_about = "Reads a CSV file of lender offers and produces the cheapest \
                  36-month quote for the requested amount, filling the request \
                  from the lowest-rate lenders first with decimal precision \
                  throughout."
)]
struct Cli {
    /// Path to the market CSV file (name,rate,amount with a header row), or '-' for stdin
    market_file: Option<String>,

    /// Requested loan amount (1000 to 15000 inclusive, multiples of 100)
    loan_amount: Option<u32>,

    /// Output format
    #[arg(long, default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
}

const INVALID_AMOUNT_MESSAGE: &str =
    "Loan amounts must be between 1000 and 15000 inclusive, and in multiples of 100.";
const NO_QUOTE_MESSAGE: &str = "it is not possible to provide a quote at this time!";

fn main() {
    let cli = Cli::parse();

    let (market_file, loan_amount) = match (cli.market_file, cli.loan_amount) {
        (Some(file), Some(amount)) => (file, amount),
        (None, None) => {
            print_usage();
            return;
        }
        _ => {
            eprintln!(
                "{}: both a market file and a loan amount are required",
                "error".red().bold()
            );
            process::exit(1);
        }
    };

    let market = match input::load_market(&market_file) {
        Ok(market) => market,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let calculator = QuoteCalculator::new(market);

    match calculator.find_best_quote(loan_amount) {
        Ok(Some(quote)) => output::format_output(&cli.output, &quote),
        Ok(None) => println!("{}", NO_QUOTE_MESSAGE),
        Err(LoanQuoteError::InvalidLoanAmount { .. }) => {
            eprintln!("{}", INVALID_AMOUNT_MESSAGE);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: quote <market-file> <loan-amount>");
    println!("\te.g. quote market.csv 1000");
}
