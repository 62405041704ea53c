//! Deadline arithmetic for switching windows.
//!
//! All values are calendar dates, so day counts never drift with the time
//! of day. Business days are Monday through Friday; public holidays are not
//! considered.

use chrono::{Datelike, NaiveDate, Weekday};

use super::{WindowKind, ANNUAL_CHANGE_DEADLINE, MID_YEAR_DEADLINE};

/// Whether `date` is Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walk back from `date` until a weekday is reached.
///
/// May land in the previous month (Sunday the 1st rolls back to Friday).
pub fn last_business_day_on_or_before(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    while !is_business_day(day) {
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    day
}

/// Whole days from `today` to `target`. Negative when `target` is past.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// Last business day on or before `(month, day)` of `today`'s year, rolled
/// to the following year once that business day is already behind `today`.
fn yearly_deadline(today: NaiveDate, (month, day): (u32, u32)) -> Option<NaiveDate> {
    let this_year =
        last_business_day_on_or_before(NaiveDate::from_ymd_opt(today.year(), month, day)?);
    if this_year >= today {
        return Some(this_year);
    }
    let next_year = NaiveDate::from_ymd_opt(today.year().checked_add(1)?, month, day)?;
    Some(last_business_day_on_or_before(next_year))
}

/// Deadline for a window of `kind` as seen from `today`.
///
/// Returns `None` only at the edges of the representable date range.
pub fn deadline_for(kind: WindowKind, today: NaiveDate) -> Option<NaiveDate> {
    match kind {
        WindowKind::ModelChange => last_day_of_month(today).map(last_business_day_on_or_before),
        WindowKind::MidYear => yearly_deadline(today, MID_YEAR_DEADLINE),
        WindowKind::AnnualChange => yearly_deadline(today, ANNUAL_CHANGE_DEADLINE),
    }
}
