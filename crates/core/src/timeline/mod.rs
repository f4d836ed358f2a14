//! Month bucketing for the year timeline
//!
//! Goals and events are grouped by the UTC calendar month of their date.
//! An item dated in the timeline year lands in exactly one bucket; items
//! from any other year land in none.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use yearflow_domain::{CalendarEvent, Goal};

/// One month of one year (`month` is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthMarker {
    pub year: i32,
    pub month: u32,
}

impl MonthMarker {
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Full month name, e.g. `"March"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name())
    }

    /// Three-letter abbreviation used in the grid, e.g. `"Mar"`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let name = self.name();
        name.get(..3).unwrap_or(name)
    }
}

impl fmt::Display for MonthMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// The twelve markers of `year`, January first.
#[must_use]
pub fn months_of_year(year: i32) -> Vec<MonthMarker> {
    (1..=12).map(|month| MonthMarker { year, month }).collect()
}

/// Anything placed on the timeline by a calendar date.
pub trait Dated {
    fn day(&self) -> NaiveDate;
}

impl Dated for Goal {
    fn day(&self) -> NaiveDate {
        self.target_day()
    }
}

impl Dated for CalendarEvent {
    fn day(&self) -> NaiveDate {
        self.date
    }
}

/// Items dated within `marker`, in input order.
#[must_use]
pub fn items_in_month<'a, T: Dated>(marker: MonthMarker, items: &'a [T]) -> Vec<&'a T> {
    items.iter().filter(|item| marker.contains(item.day())).collect()
}

/// Items of one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket<'a, T> {
    pub marker: MonthMarker,
    pub items: Vec<&'a T>,
}

/// Bucket `items` into the months of `year` with a single pass.
#[must_use]
pub fn bucket_by_month<'a, T: Dated>(year: i32, items: &'a [T]) -> Vec<MonthBucket<'a, T>> {
    let mut buckets: Vec<MonthBucket<'a, T>> = months_of_year(year)
        .into_iter()
        .map(|marker| MonthBucket { marker, items: Vec::new() })
        .collect();
    let index: HashMap<MonthMarker, usize> =
        buckets.iter().enumerate().map(|(i, bucket)| (bucket.marker, i)).collect();

    for item in items {
        if let Some(&slot) = index.get(&MonthMarker::of(item.day())) {
            buckets[slot].items.push(item);
        }
    }
    buckets
}

/// Grid cell of the year overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMonth {
    pub marker: MonthMarker,
    pub goal_count: usize,
    pub event_count: usize,
    pub is_current: bool,
}

/// Per-month counts for `year`. `today` marks the current month.
#[must_use]
pub fn timeline_summary(
    year: i32,
    goals: &[Goal],
    events: &[CalendarEvent],
    today: NaiveDate,
) -> Vec<TimelineMonth> {
    let current = MonthMarker::of(today);
    bucket_by_month(year, goals)
        .into_iter()
        .zip(bucket_by_month(year, events))
        .map(|(goal_bucket, event_bucket)| TimelineMonth {
            marker: goal_bucket.marker,
            goal_count: goal_bucket.items.len(),
            event_count: event_bucket.items.len(),
            is_current: goal_bucket.marker == current,
        })
        .collect()
}

/// New selection after clicking `clicked`: the selected month toggles off,
/// any other month becomes selected.
#[must_use]
pub fn toggle_month_selection(
    selected: Option<MonthMarker>,
    clicked: MonthMarker,
) -> Option<MonthMarker> {
    match selected {
        Some(current) if current == clicked => None,
        _ => Some(clicked),
    }
}

/// Detail panel for the selected month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDetail {
    pub marker: MonthMarker,
    pub goals: Vec<Goal>,
    pub events: Vec<CalendarEvent>,
}

impl MonthDetail {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty() && self.events.is_empty()
    }
}

#[must_use]
pub fn month_detail(marker: MonthMarker, goals: &[Goal], events: &[CalendarEvent]) -> MonthDetail {
    MonthDetail {
        marker,
        goals: items_in_month(marker, goals).into_iter().cloned().collect(),
        events: items_in_month(marker, events).into_iter().cloned().collect(),
    }
}
