//! Partition offers by coverage category.

use serde::Serialize;

use crate::plan::{PlanCategory, PlanOffer};

/// Offers grouped by category, each group sorted ascending by premium.
///
/// Equal premiums keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedOffers {
    buckets: [Vec<PlanOffer>; 4],
}

impl CategorizedOffers {
    pub fn get(&self, category: PlanCategory) -> &[PlanOffer] {
        &self.buckets[category.index()]
    }

    /// Groups in fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (PlanCategory, &[PlanOffer])> {
        PlanCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Cheapest offer of `category`.
    pub fn cheapest(&self, category: PlanCategory) -> Option<&PlanOffer> {
        self.get(category).first()
    }

    /// Find the offer for `(insurer, plan_id)`, searching categories in
    /// fixed order and stopping at the first match.
    pub fn find_plan(&self, insurer: &str, plan_id: &str) -> Option<&PlanOffer> {
        self.iter()
            .flat_map(|(_, offers)| offers.iter())
            .find(|offer| offer.is_plan(insurer, plan_id))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Partition `offers` into the four categories.
pub fn categorize(offers: &[PlanOffer]) -> CategorizedOffers {
    let mut categorized = CategorizedOffers::default();
    for offer in offers {
        categorized.buckets[offer.category.index()].push(offer.clone());
    }
    for bucket in &mut categorized.buckets {
        bucket.sort_by(|a, b| a.monthly_premium.cmp(&b.monthly_premium));
    }
    categorized
}
