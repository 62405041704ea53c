//! Fixed-shape comparison of the current plan against the cheapest options.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AnnualSavings, CategorizedOffers};
use crate::plan::{PlanCategory, PlanOffer};
use crate::profile::UserProfile;

/// Position of a slot in a [`ComparisonResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    Current,
    CheapestSameCategory,
    CheapestOther1,
    CheapestOther2,
}

impl SlotRole {
    pub const ORDER: [SlotRole; 4] = [
        SlotRole::Current,
        SlotRole::CheapestSameCategory,
        SlotRole::CheapestOther1,
        SlotRole::CheapestOther2,
    ];
}

/// A populated comparison slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub category: PlanCategory,
    pub insurer_name: String,
    pub plan_id: String,
    pub plan_label: String,
    pub monthly_premium: Decimal,
    /// Absent for the current plan and for equal premiums.
    pub annual_savings: Option<AnnualSavings>,
}

impl ComparisonEntry {
    fn current(offer: &PlanOffer) -> Self {
        Self {
            category: offer.category,
            insurer_name: offer.insurer_name.clone(),
            plan_id: offer.plan_id.clone(),
            plan_label: offer.plan_label.clone(),
            monthly_premium: offer.monthly_premium,
            annual_savings: None,
        }
    }

    fn candidate(offer: &PlanOffer, current: &PlanOffer) -> Self {
        Self {
            annual_savings: AnnualSavings::between(current, offer),
            ..Self::current(offer)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonSlot {
    Offer(ComparisonEntry),
    /// No data; carries the category label when one is known.
    NoData { category: Option<PlanCategory> },
}

impl ComparisonSlot {
    pub fn entry(&self) -> Option<&ComparisonEntry> {
        match self {
            ComparisonSlot::Offer(entry) => Some(entry),
            ComparisonSlot::NoData { .. } => None,
        }
    }

    pub fn category(&self) -> Option<PlanCategory> {
        match self {
            ComparisonSlot::Offer(entry) => Some(entry.category),
            ComparisonSlot::NoData { category } => *category,
        }
    }

    fn no_data() -> Self {
        ComparisonSlot::NoData { category: None }
    }
}

/// Always exactly four slots, in [`SlotRole::ORDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub slots: [ComparisonSlot; 4],
}

impl ComparisonResult {
    /// All placeholders; used when the current plan is unknown.
    pub fn unresolved() -> Self {
        Self {
            slots: std::array::from_fn(|_| ComparisonSlot::no_data()),
        }
    }

    pub fn slot(&self, role: SlotRole) -> &ComparisonSlot {
        let index = SlotRole::ORDER
            .iter()
            .position(|r| *r == role)
            .unwrap_or_default();
        &self.slots[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotRole, &ComparisonSlot)> {
        SlotRole::ORDER.into_iter().zip(self.slots.iter())
    }

    pub fn is_resolved(&self) -> bool {
        self.slots[0].entry().is_some()
    }
}

/// Build the comparison for `profile` over `categorized`.
///
/// The current plan is looked up by `(insurer, plan_id)`. If it cannot be
/// found every slot is a placeholder.
pub fn build_comparison(categorized: &CategorizedOffers, profile: &UserProfile) -> ComparisonResult {
    let current = profile
        .current_plan_key()
        .and_then(|(insurer, plan_id)| categorized.find_plan(insurer, plan_id));
    match current {
        Some(current) => compare_against(categorized, current),
        None => ComparisonResult::unresolved(),
    }
}

/// Build the comparison around an already resolved current plan.
pub fn compare_against(categorized: &CategorizedOffers, current: &PlanOffer) -> ComparisonResult {
    let same_category = categorized
        .get(current.category)
        .iter()
        .find(|offer| !offer.same_plan(current))
        .map(|offer| ComparisonSlot::Offer(ComparisonEntry::candidate(offer, current)))
        .unwrap_or(ComparisonSlot::NoData {
            category: Some(current.category),
        });

    let mut others: Vec<&PlanOffer> = PlanCategory::ALL
        .into_iter()
        .filter(|category| *category != current.category)
        .filter_map(|category| categorized.cheapest(category))
        .collect();
    others.sort_by(|a, b| a.monthly_premium.cmp(&b.monthly_premium));

    let mut others = others
        .into_iter()
        .map(|offer| ComparisonSlot::Offer(ComparisonEntry::candidate(offer, current)));
    let other1 = others.next().unwrap_or_else(ComparisonSlot::no_data);
    let other2 = others.next().unwrap_or_else(ComparisonSlot::no_data);

    ComparisonResult {
        slots: [
            ComparisonSlot::Offer(ComparisonEntry::current(current)),
            same_category,
            other1,
            other2,
        ],
    }
}
