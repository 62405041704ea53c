//! Switching-window eligibility.
//!
//! Three opportunities exist to leave the current plan:
//! - **Model change**: same insurer, different coverage model, effective at
//!   the next month boundary. Open to Standard plans in every month except
//!   the annual-change month.
//! - **Mid-year change**: provider switch effective July 1, reserved for
//!   Standard plans on the lowest deductible tier during the first quarter.
//! - **Annual change**: provider switch effective January 1, with the
//!   admission window in November.
//!
//! Windows carry no display text; see [`crate::present`].

pub mod deadline;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::plan::PlanCategory;

/// Month in which the annual change is admitted and model changes pause.
pub const ANNUAL_CHANGE_MONTH: Month = Month::November;

/// Last month (inclusive, counting from January) of the mid-year window.
pub const MID_YEAR_LAST_MONTH: Month = Month::March;

/// `(month, day)` the mid-year notice must reach the insurer by.
pub const MID_YEAR_DEADLINE: (u32, u32) = (3, 31);

/// `(month, day)` the annual notice must reach the insurer by.
pub const ANNUAL_CHANGE_DEADLINE: (u32, u32) = (11, 30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    ModelChange,
    MidYear,
    AnnualChange,
}

/// One switching opportunity as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityWindow {
    pub kind: WindowKind,
    pub is_open: bool,
    /// Days until the deadline; 0 whenever the window is closed.
    pub days_remaining: i64,
    /// Deadline of an open window.
    pub deadline: Option<NaiveDate>,
}

impl EligibilityWindow {
    fn open(kind: WindowKind, today: NaiveDate) -> Self {
        let deadline = deadline::deadline_for(kind, today);
        let days_remaining = deadline
            .map(|d| deadline::days_until(today, d).max(0))
            .unwrap_or(0);
        Self {
            kind,
            is_open: true,
            days_remaining,
            deadline,
        }
    }

    fn closed(kind: WindowKind) -> Self {
        Self {
            kind,
            is_open: false,
            days_remaining: 0,
            deadline: None,
        }
    }

    fn new(kind: WindowKind, is_open: bool, today: NaiveDate) -> Self {
        if is_open {
            Self::open(kind, today)
        } else {
            Self::closed(kind)
        }
    }
}

fn is_month(today: NaiveDate, month: Month) -> bool {
    today.month() == month.number_from_month()
}

/// Decide which windows apply on `today`.
///
/// `category` is `None` when the current plan could not be resolved, in
/// which case nothing is emitted. At most two windows are returned: the
/// model change, then exactly one of mid-year or annual.
pub fn resolve_windows(
    category: Option<PlanCategory>,
    is_lowest_tier: bool,
    today: NaiveDate,
) -> Vec<EligibilityWindow> {
    let Some(category) = category else {
        return Vec::new();
    };

    let mut windows = Vec::with_capacity(2);
    let annual_month = is_month(today, ANNUAL_CHANGE_MONTH);
    let is_standard = category == PlanCategory::Standard;

    if is_standard && !annual_month {
        windows.push(EligibilityWindow::open(WindowKind::ModelChange, today));
    }

    let in_mid_year_months = today.month() <= MID_YEAR_LAST_MONTH.number_from_month();
    if is_standard && is_lowest_tier && in_mid_year_months {
        windows.push(EligibilityWindow::open(WindowKind::MidYear, today));
    } else {
        windows.push(EligibilityWindow::new(
            WindowKind::AnnualChange,
            annual_month,
            today,
        ));
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn kinds(windows: &[EligibilityWindow]) -> Vec<(WindowKind, bool)> {
        windows.iter().map(|w| (w.kind, w.is_open)).collect()
    }

    #[test]
    fn unresolved_category_yields_no_windows() {
        assert!(resolve_windows(None, true, d(2024, 1, 10)).is_empty());
        assert!(resolve_windows(None, false, d(2024, 11, 10)).is_empty());
    }

    #[test]
    fn november_standard_has_annual_open_and_no_model_change() {
        for lowest in [true, false] {
            let windows = resolve_windows(Some(PlanCategory::Standard), lowest, d(2024, 11, 4));
            assert_eq!(kinds(&windows), vec![(WindowKind::AnnualChange, true)]);
            assert_eq!(windows[0].deadline, Some(d(2024, 11, 29)));
            assert_eq!(windows[0].days_remaining, 25);
        }
    }

    #[test]
    fn january_standard_lowest_tier_gets_mid_year_not_annual() {
        let windows = resolve_windows(Some(PlanCategory::Standard), true, d(2024, 1, 15));
        assert_eq!(
            kinds(&windows),
            vec![(WindowKind::ModelChange, true), (WindowKind::MidYear, true)]
        );
        assert_eq!(windows[1].deadline, Some(d(2024, 3, 29)));
        assert_eq!(windows[1].days_remaining, 74);
    }

    #[test]
    fn standard_lowest_tier_after_march_falls_back_to_closed_annual() {
        let windows = resolve_windows(Some(PlanCategory::Standard), true, d(2024, 4, 1));
        assert_eq!(
            kinds(&windows),
            vec![(WindowKind::ModelChange, true), (WindowKind::AnnualChange, false)]
        );
    }

    #[test]
    fn standard_higher_tier_in_january_gets_closed_annual() {
        let windows = resolve_windows(Some(PlanCategory::Standard), false, d(2024, 1, 15));
        assert_eq!(
            kinds(&windows),
            vec![(WindowKind::ModelChange, true), (WindowKind::AnnualChange, false)]
        );
    }

    #[test]
    fn hmo_outside_november_only_has_closed_annual() {
        for month in (1..=12).filter(|m| *m != 11) {
            let windows = resolve_windows(Some(PlanCategory::Hmo), true, d(2024, month, 10));
            assert_eq!(kinds(&windows), vec![(WindowKind::AnnualChange, false)]);
            assert_eq!(windows[0].days_remaining, 0);
            assert_eq!(windows[0].deadline, None);
        }
    }

    #[test]
    fn non_standard_in_november_has_open_annual() {
        let windows = resolve_windows(Some(PlanCategory::FamilyDoctor), false, d(2024, 11, 29));
        assert_eq!(kinds(&windows), vec![(WindowKind::AnnualChange, true)]);
        assert_eq!(windows[0].days_remaining, 0);
    }

    #[test]
    fn open_window_never_reports_negative_days() {
        // Saturday 2024-08-31: the month's last business day was yesterday.
        let windows = resolve_windows(Some(PlanCategory::Standard), false, d(2024, 8, 31));
        assert_eq!(windows[0].kind, WindowKind::ModelChange);
        assert!(windows[0].is_open);
        assert_eq!(windows[0].deadline, Some(d(2024, 8, 30)));
        assert_eq!(windows[0].days_remaining, 0);
    }

    #[test]
    fn never_more_than_two_windows() {
        for category in PlanCategory::ALL {
            for month in 1..=12 {
                for lowest in [true, false] {
                    let windows = resolve_windows(Some(category), lowest, d(2025, month, 15));
                    assert!(!windows.is_empty() && windows.len() <= 2);
                    let branch = windows
                        .iter()
                        .filter(|w| w.kind != WindowKind::ModelChange)
                        .count();
                    assert_eq!(branch, 1);
                }
            }
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let a = resolve_windows(Some(PlanCategory::Standard), true, d(2024, 2, 29));
        let b = resolve_windows(Some(PlanCategory::Standard), true, d(2024, 2, 29));
        assert_eq!(a, b);
    }
}
