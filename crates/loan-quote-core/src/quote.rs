//! The quote calculator: greedy allocation across a lender market and
//! conversion of the blended rate into a fixed monthly repayment.
//!
//! All math uses `rust_decimal::Decimal`; the weighted-rate accumulation and
//! the final rounding never touch binary floating point.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::annuity;
use crate::error::LoanQuoteError;
use crate::types::{Market, Money, Quote};
use crate::LoanQuoteResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Repayments are spread over a fixed 3-year term.
pub const TERM_MONTHS: u32 = 36;
/// Smallest quotable loan.
pub const MIN_LOAN_AMOUNT: u32 = 1_000;
/// Largest quotable loan.
pub const MAX_LOAN_AMOUNT: u32 = 15_000;
/// Loans are quoted only in steps of this amount.
pub const LOAN_INCREMENT: u32 = 100;

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Computes blended-rate quotes against an immutable market snapshot.
///
/// Constructed once per snapshot; every call to [`find_best_quote`] is a pure
/// function of the snapshot and the requested amount.
///
/// [`find_best_quote`]: QuoteCalculator::find_best_quote
pub struct QuoteCalculator {
    market: Market,
}

impl QuoteCalculator {
    pub fn new(market: Market) -> Self {
        Self { market }
    }

    /// Find the cheapest quote the market can offer for `loan_amount`.
    ///
    /// Returns `Ok(None)` when the market's aggregate capacity cannot cover
    /// the request. That is a normal business outcome, not an error; only an
    /// amount outside the quotable range (or off the 100 increment) fails,
    /// with [`LoanQuoteError::InvalidLoanAmount`].
    pub fn find_best_quote(&self, loan_amount: u32) -> LoanQuoteResult<Option<Quote>> {
        if loan_amount < MIN_LOAN_AMOUNT
            || loan_amount > MAX_LOAN_AMOUNT
            || loan_amount % LOAN_INCREMENT != 0
        {
            return Err(LoanQuoteError::InvalidLoanAmount {
                amount: loan_amount,
            });
        }

        let requested = Money::from(loan_amount);
        if self.market.total_capacity() < requested {
            return Ok(None);
        }

        // Cheapest lenders fill the request first. The capacity check above
        // guarantees amount_needed reaches zero before offers run out, so
        // lenders past that point never contribute to the blended rate.
        let mut blended_rate = Decimal::ZERO;
        let mut amount_needed = requested;
        for lender in self.market.by_ascending_rate() {
            if amount_needed.is_zero() {
                break;
            }
            let drawn = lender.amount.min(amount_needed);
            blended_rate += lender.rate * (drawn / requested);
            amount_needed -= drawn;
        }

        let monthly =
            annuity::level_payment(requested, blended_rate / MONTHS_PER_YEAR, TERM_MONTHS)?;

        // Presentation rounding happens only here; the total repayment is
        // derived from the unrounded monthly payment.
        Ok(Some(Quote {
            requested_amount: requested,
            rate_percent: (blended_rate * dec!(100)).round_dp(1),
            monthly_payment: monthly.round_dp(2),
            total_repayment: (monthly * Decimal::from(TERM_MONTHS)).round_dp(2),
        }))
    }
}
