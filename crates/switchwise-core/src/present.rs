//! Display text for engine results.
//!
//! Kept apart from the engine so wording can be swapped without touching
//! eligibility or ranking. Rounding to two decimals happens here and only
//! here.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::compare::{AlternativeRow, AnnualSavings, ComparisonSlot, SlotRole};
use crate::windows::{EligibilityWindow, WindowKind};

/// Minus sign shown in front of favourable savings.
pub const MINUS_SIGN: char = '\u{2212}';

/// Headline and detail text for a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowText {
    pub headline: String,
    pub detail: String,
}

/// Maps a window variant to user-facing text.
pub trait WindowPresenter {
    fn present(&self, window: &EligibilityWindow) -> WindowText;
}

/// Default English wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPresenter;

fn plural_days(days: i64) -> String {
    if days == 1 {
        "1 day left".to_string()
    } else {
        format!("{days} days left")
    }
}

impl WindowPresenter for EnglishPresenter {
    fn present(&self, window: &EligibilityWindow) -> WindowText {
        let headline = match window.kind {
            WindowKind::ModelChange => "Model change",
            WindowKind::MidYear => "Mid-year change",
            WindowKind::AnnualChange => "Annual change",
        }
        .to_string();

        let detail = match (window.kind, window.is_open) {
            (WindowKind::ModelChange, true) => format!(
                "Switch to another model with your insurer from next month: {}",
                plural_days(window.days_remaining)
            ),
            (WindowKind::MidYear, true) => format!(
                "Switch insurer effective July 1: {}",
                plural_days(window.days_remaining)
            ),
            (WindowKind::AnnualChange, true) => format!(
                "Switch insurer effective January 1: {}",
                plural_days(window.days_remaining)
            ),
            (WindowKind::ModelChange, false) => "Model changes are paused this month".to_string(),
            (WindowKind::MidYear, false) => "Opens again in January".to_string(),
            (WindowKind::AnnualChange, false) => "Opens in November".to_string(),
        };

        WindowText { headline, detail }
    }
}

fn two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monthly premium, e.g. `CHF 312.45`.
pub fn format_premium(premium: Decimal, currency: &str) -> String {
    format!("{currency} {:.2}", two_places(premium))
}

/// Signed annual difference as shown to the user.
///
/// Cheaper candidates (positive raw savings) are prefixed with a minus
/// sign, dearer ones with `+`.
pub fn format_savings(savings: &AnnualSavings, currency: &str) -> String {
    let sign = if savings.is_favorable() { MINUS_SIGN } else { '+' };
    format!("{sign}{currency} {:.2}", two_places(savings.raw().abs()))
}

/// Savings text, empty when there is nothing to show.
pub fn savings_text(savings: Option<&AnnualSavings>, currency: &str) -> String {
    savings
        .map(|s| format_savings(s, currency))
        .unwrap_or_default()
}

pub fn slot_title(role: SlotRole) -> &'static str {
    match role {
        SlotRole::Current => "Current plan",
        SlotRole::CheapestSameCategory => "Cheapest same model",
        SlotRole::CheapestOther1 | SlotRole::CheapestOther2 => "Cheapest other model",
    }
}

/// One text line for a comparison slot.
pub fn render_slot(role: SlotRole, slot: &ComparisonSlot, currency: &str) -> String {
    match slot {
        ComparisonSlot::Offer(entry) => {
            let mut line = format!(
                "{:<22} {:<14} {} / {}  {}/month",
                slot_title(role),
                entry.category.label(),
                entry.insurer_name,
                entry.plan_label,
                format_premium(entry.monthly_premium, currency)
            );
            let savings = savings_text(entry.annual_savings.as_ref(), currency);
            if !savings.is_empty() {
                line.push_str(&format!("  ({savings}/year)"));
            }
            line
        }
        ComparisonSlot::NoData { category } => format!(
            "{:<22} {:<14} no data",
            slot_title(role),
            category.map(|c| c.label()).unwrap_or("-")
        ),
    }
}

/// One text line for a model-alternative row.
pub fn render_alternative(row: &AlternativeRow, currency: &str) -> String {
    let marker = if row.is_current { "current" } else { "" };
    let savings = savings_text(row.annual_savings.as_ref(), currency);
    format!(
        "{:<14} {:<30} {:>12}  {:<8} {}",
        row.category.label(),
        row.plan_label,
        format_premium(row.monthly_premium, currency),
        marker,
        savings
    )
    .trim_end()
    .to_string()
}
