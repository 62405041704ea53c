//! Premium comparison against the currently held plan.

pub mod alternatives;
pub mod categorize;
pub mod comparison;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::plan::PlanOffer;

pub use alternatives::{model_alternatives, AlternativeRow};
pub use categorize::{categorize, CategorizedOffers};
pub use comparison::{build_comparison, ComparisonEntry, ComparisonResult, ComparisonSlot, SlotRole};

/// Months per premium year.
const MONTHS_PER_YEAR: i64 = 12;

/// Raw annual difference `(current - candidate) * 12`, never zero.
///
/// Positive means the candidate is cheaper than the current plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualSavings(pub Decimal);

impl AnnualSavings {
    /// Savings of switching from `current` to `candidate`, or `None` when
    /// the premiums are equal.
    pub fn between(current: &PlanOffer, candidate: &PlanOffer) -> Option<Self> {
        let raw = (current.monthly_premium - candidate.monthly_premium)
            * Decimal::from(MONTHS_PER_YEAR);
        (!raw.is_zero()).then_some(AnnualSavings(raw))
    }

    pub fn raw(&self) -> Decimal {
        self.0
    }

    /// Whether switching would lower the premium.
    pub fn is_favorable(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}
