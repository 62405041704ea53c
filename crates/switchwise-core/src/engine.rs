//! Evaluation facade combining windows, comparison and alternatives.
//!
//! # Usage
//! ```rust,ignore
//! use switchwise_core::{FixedClock, SwitchEngine};
//!
//! let engine = SwitchEngine::new(FixedClock(today));
//! let evaluation = engine.evaluate(&profile, &offers);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::compare::{categorize, comparison, model_alternatives, AlternativeRow, ComparisonResult};
use crate::plan::{PlanCategory, PlanOffer};
use crate::profile::UserProfile;
use crate::windows::{resolve_windows, EligibilityWindow};

/// Snapshot of everything the engine derives for one `(profile, offers, today)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub today: NaiveDate,
    /// Category of the current plan, if it was found in the offers.
    pub current_category: Option<PlanCategory>,
    pub windows: Vec<EligibilityWindow>,
    pub comparison: ComparisonResult,
    /// Empty unless the current plan is Standard.
    pub alternatives: Vec<AlternativeRow>,
}

/// Pure evaluation on an explicit date.
pub fn evaluate_at(profile: &UserProfile, offers: &[PlanOffer], today: NaiveDate) -> Evaluation {
    let categorized = categorize(offers);
    let current = profile
        .current_plan_key()
        .and_then(|(insurer, plan_id)| categorized.find_plan(insurer, plan_id));
    let current_category = current.map(|offer| offer.category);

    tracing::debug!(
        %today,
        offers = categorized.len(),
        standard = categorized.get(PlanCategory::Standard).len(),
        family_doctor = categorized.get(PlanCategory::FamilyDoctor).len(),
        hmo = categorized.get(PlanCategory::Hmo).len(),
        other = categorized.get(PlanCategory::Other).len(),
        ?current_category,
        "evaluating switch options"
    );

    let windows = resolve_windows(current_category, profile.is_lowest_deductible_tier(), today);
    let (comparison, alternatives) = match current {
        Some(current) => (
            comparison::compare_against(&categorized, current),
            model_alternatives(&categorized, current),
        ),
        None => (ComparisonResult::unresolved(), Vec::new()),
    };

    tracing::debug!(
        windows = windows.len(),
        open = windows.iter().filter(|w| w.is_open).count(),
        alternatives = alternatives.len(),
        "evaluation complete"
    );

    Evaluation {
        today,
        current_category,
        windows,
        comparison,
        alternatives,
    }
}

/// Engine bound to a [`Clock`].
#[derive(Debug, Clone)]
pub struct SwitchEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> SwitchEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn evaluate(&self, profile: &UserProfile, offers: &[PlanOffer]) -> Evaluation {
        evaluate_at(profile, offers, self.clock.today())
    }

    /// Only the switching windows.
    pub fn windows(&self, profile: &UserProfile, offers: &[PlanOffer]) -> Vec<EligibilityWindow> {
        self.evaluate(profile, offers).windows
    }

    /// Only the four-slot comparison.
    pub fn comparison(&self, profile: &UserProfile, offers: &[PlanOffer]) -> ComparisonResult {
        comparison::build_comparison(&categorize(offers), profile)
    }

    /// Only the same-insurer model alternatives.
    pub fn alternatives(&self, profile: &UserProfile, offers: &[PlanOffer]) -> Vec<AlternativeRow> {
        self.evaluate(profile, offers).alternatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::compare::SlotRole;
    use crate::plan::fixtures::offer;
    use crate::profile::fixtures::adult;
    use crate::windows::WindowKind;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn offers() -> Vec<PlanOffer> {
        vec![
            offer(PlanCategory::Standard, "Helvia", "S200", "200"),
            offer(PlanCategory::Standard, "Helvia", "S180", "180"),
            offer(PlanCategory::FamilyDoctor, "Helvia", "F150", "150"),
            offer(PlanCategory::Hmo, "Alpina", "H170", "170"),
            offer(PlanCategory::Other, "Rhein", "O190", "190"),
        ]
    }

    #[test]
    fn standard_plan_in_january_gets_full_evaluation() {
        let engine = SwitchEngine::new(FixedClock(d(2025, 1, 6)));
        let evaluation = engine.evaluate(&adult(Some("Helvia"), Some("S180")), &offers());

        assert_eq!(evaluation.current_category, Some(PlanCategory::Standard));
        let kinds: Vec<_> = evaluation.windows.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WindowKind::ModelChange, WindowKind::MidYear]);
        assert!(evaluation.comparison.is_resolved());
        let ids: Vec<_> = evaluation.alternatives.iter().map(|r| r.plan_id.as_str()).collect();
        assert_eq!(ids, vec!["S180", "F150"]);
    }

    #[test]
    fn unknown_insurer_degrades_everything() {
        let engine = SwitchEngine::new(FixedClock(d(2025, 11, 3)));
        let evaluation = engine.evaluate(&adult(None, None), &offers());
        assert_eq!(evaluation.current_category, None);
        assert!(evaluation.windows.is_empty());
        assert!(!evaluation.comparison.is_resolved());
        assert!(evaluation.alternatives.is_empty());
    }

    #[test]
    fn empty_offer_set_degrades_to_placeholders() {
        let evaluation = evaluate_at(&adult(Some("Helvia"), Some("S180")), &[], d(2025, 5, 5));
        assert!(evaluation.windows.is_empty());
        assert_eq!(evaluation.comparison, ComparisonResult::unresolved());
    }

    #[test]
    fn non_standard_plan_has_no_alternatives() {
        let evaluation = evaluate_at(&adult(Some("Alpina"), Some("H170")), &offers(), d(2025, 11, 3));
        assert_eq!(evaluation.current_category, Some(PlanCategory::Hmo));
        assert!(evaluation.alternatives.is_empty());
        assert_eq!(evaluation.windows.len(), 1);
        assert!(evaluation.windows[0].is_open);
        let same = evaluation.comparison.slot(SlotRole::CheapestSameCategory);
        assert_eq!(same.category(), Some(PlanCategory::Hmo));
        assert!(same.entry().is_none());
    }

    #[test]
    fn facade_methods_agree_with_evaluate() {
        let engine = SwitchEngine::new(FixedClock(d(2024, 2, 29)));
        let profile = adult(Some("Helvia"), Some("S180"));
        let evaluation = engine.evaluate(&profile, &offers());
        assert_eq!(engine.windows(&profile, &offers()), evaluation.windows);
        assert_eq!(engine.comparison(&profile, &offers()), evaluation.comparison);
        assert_eq!(engine.alternatives(&profile, &offers()), evaluation.alternatives);
        assert_eq!(engine.evaluate(&profile, &offers()), evaluation);
    }
}
