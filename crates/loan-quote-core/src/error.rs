use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanQuoteError {
    /// One kind covers all three violations: below the minimum, above the
    /// maximum, or not a multiple of the increment. Callers are not told
    /// which one failed.
    #[error("invalid loan amount {amount}: must be between 1000 and 15000 inclusive, in multiples of 100")]
    InvalidLoanAmount { amount: u32 },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },
}
