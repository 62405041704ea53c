//! Same-insurer model alternatives for Standard plan holders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AnnualSavings, CategorizedOffers};
use crate::plan::{PlanCategory, PlanOffer};

/// Categories offered as a model change away from Standard, in listing order.
const ALTERNATIVE_ORDER: [PlanCategory; 3] = [
    PlanCategory::FamilyDoctor,
    PlanCategory::Hmo,
    PlanCategory::Other,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeRow {
    pub category: PlanCategory,
    pub insurer_name: String,
    pub plan_id: String,
    pub plan_label: String,
    pub monthly_premium: Decimal,
    pub is_current: bool,
    pub annual_savings: Option<AnnualSavings>,
}

impl AlternativeRow {
    fn from_offer(offer: &PlanOffer, current: &PlanOffer) -> Self {
        let is_current = offer.same_plan(current);
        Self {
            category: offer.category,
            insurer_name: offer.insurer_name.clone(),
            plan_id: offer.plan_id.clone(),
            plan_label: offer.plan_label.clone(),
            monthly_premium: offer.monthly_premium,
            is_current,
            annual_savings: if is_current {
                None
            } else {
                AnnualSavings::between(current, offer)
            },
        }
    }
}

/// List the current insurer's plans in other coverage models.
///
/// Empty unless `current` is a Standard plan. Otherwise the current plan
/// comes first, followed by the insurer's Family-doctor, HMO and Other
/// offers, each group ascending by premium.
pub fn model_alternatives(categorized: &CategorizedOffers, current: &PlanOffer) -> Vec<AlternativeRow> {
    if current.category != PlanCategory::Standard {
        return Vec::new();
    }

    let mut rows = vec![AlternativeRow::from_offer(current, current)];
    for category in ALTERNATIVE_ORDER {
        rows.extend(
            categorized
                .get(category)
                .iter()
                .filter(|offer| offer.insurer_name == current.insurer_name)
                .map(|offer| AlternativeRow::from_offer(offer, current)),
        );
    }
    rows
}
