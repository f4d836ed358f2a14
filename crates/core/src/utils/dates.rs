//! Calendar arithmetic on UTC dates
//!
//! All helpers return `Option` instead of panicking on out-of-range years.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use yearflow_domain::DateRange;

/// First instant (00:00 UTC) of `date`.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// First instant of a month. `month` may exceed 12 and rolls into the
/// following years.
#[must_use]
pub fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    let zero_based = month.checked_sub(1)?;
    let year = year.checked_add(i32::try_from(zero_based / 12).ok()?)?;
    let date = NaiveDate::from_ymd_opt(year, zero_based % 12 + 1, 1)?;
    start_of_day(date)
}

/// Inclusive range covering `months` whole months starting at
/// `year`/`month`. The end is the last millisecond of the final day.
#[must_use]
pub fn months_range(year: i32, month: u32, months: u32) -> Option<DateRange> {
    let start = month_start(year, month)?;
    let next = month_start(year, month.checked_add(months)?)?;
    Some(DateRange { start, end: next - Duration::milliseconds(1) })
}

/// First month (1-based) of the quarter containing `month`.
#[must_use]
pub const fn quarter_start_month(month: u32) -> u32 {
    (month.saturating_sub(1) / 3) * 3 + 1
}

/// `(year, month)` of an instant, in UTC.
#[must_use]
pub fn year_month(instant: DateTime<Utc>) -> (i32, u32) {
    (instant.year(), instant.month())
}
