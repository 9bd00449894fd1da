pub mod annuity;
pub mod error;
pub mod quote;
pub mod types;

pub use error::LoanQuoteError;
pub use quote::QuoteCalculator;
pub use types::*;

/// Standard result type for all loan-quote operations
pub type LoanQuoteResult<T> = Result<T, LoanQuoteError>;
