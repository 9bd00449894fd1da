use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.07 = 7%). Never as percentages.
pub type Rate = Decimal;

/// A single lender offer: up to `amount` of capital at a fixed annual rate.
///
/// The name is informational only and never influences a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lender {
    pub name: String,
    pub rate: Rate,
    pub amount: Money,
}

/// The full set of lender offers available for one quote session.
///
/// Input order is irrelevant to the result; the calculator imposes its own
/// ordering by rate. Immutable once constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Market {
    lenders: Vec<Lender>,
}

impl Market {
    pub fn new(lenders: Vec<Lender>) -> Self {
        Self { lenders }
    }

    pub fn lenders(&self) -> &[Lender] {
        &self.lenders
    }

    pub fn is_empty(&self) -> bool {
        self.lenders.is_empty()
    }

    /// Aggregate amount on offer across all lenders.
    pub fn total_capacity(&self) -> Money {
        self.lenders.iter().map(|l| l.amount).sum()
    }

    /// Offers sorted by ascending rate. The sort is stable, so lenders
    /// quoting the same rate keep their input order.
    pub(crate) fn by_ascending_rate(&self) -> Vec<&Lender> {
        let mut offers: Vec<&Lender> = self.lenders.iter().collect();
        offers.sort_by(|a, b| a.rate.cmp(&b.rate));
        offers
    }
}

/// A blended-rate quote for a single loan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The validated requested amount.
    pub requested_amount: Money,
    /// Blended annual rate as a percentage, rounded to 1 decimal place.
    pub rate_percent: Decimal,
    /// Fixed payment due each month of the term, rounded to 2 decimal places.
    pub monthly_payment: Money,
    /// Unrounded monthly payment times the term, rounded to 2 decimal places.
    pub total_repayment: Money,
}
