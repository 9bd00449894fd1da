//! Amortization math for fixed-term, fixed-rate repayment.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::LoanQuoteError;
use crate::types::{Money, Rate};
use crate::LoanQuoteResult;

/// Fixed payment due each period for a loan repaid over `periods` equal
/// instalments: `principal * rate / (1 - (1 + rate)^-periods)`.
///
/// The returned payment is unrounded; callers decide the presentation scale.
pub fn level_payment(principal: Money, periodic_rate: Rate, periods: u32) -> LoanQuoteResult<Money> {
    if periods == 0 {
        return Err(LoanQuoteError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    // The annuity formula divides by the rate; a free loan is a straight split.
    if periodic_rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let one_plus_r = Decimal::ONE + periodic_rate;
    let factor = one_plus_r.powd(Decimal::from(periods));
    if factor.is_zero() {
        return Err(LoanQuoteError::DivisionByZero {
            context: "payment discount factor".into(),
        });
    }

    let annuity_factor = (Decimal::ONE - Decimal::ONE / factor) / periodic_rate;
    if annuity_factor.is_zero() {
        return Err(LoanQuoteError::DivisionByZero {
            context: "payment annuity factor".into(),
        });
    }

    Ok(principal / annuity_factor)
}
