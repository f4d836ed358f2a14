//! Goal filtering for the planner toolbar
//!
//! Pure functions over goal slices. Results borrow from the input and keep
//! its order.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use yearflow_domain::{DateRange, Goal, GoalCategory, GoalFilter, GoalStatus};

use crate::utils::dates::{months_range, quarter_start_month, year_month};

/// True when `goal` passes every active predicate of `filter`.
#[must_use]
pub fn goal_matches(goal: &Goal, filter: &GoalFilter) -> bool {
    filter.status.matches(goal.status)
        && (filter.categories.is_empty() || filter.categories.contains(&goal.category))
        && filter.date_range.map_or(true, |range| range.contains(goal.target_date))
}

/// Goals satisfying all active predicates, in input order.
///
/// The default filter returns every goal.
#[must_use]
pub fn filter_goals<'a>(goals: &'a [Goal], filter: &GoalFilter) -> Vec<&'a Goal> {
    goals.iter().filter(|goal| goal_matches(goal, filter)).collect()
}

/// Copy of `filter` with `category` added, or removed if already selected.
#[must_use]
pub fn with_category_toggled(filter: &GoalFilter, category: GoalCategory) -> GoalFilter {
    let mut next = filter.clone();
    if !next.categories.remove(&category) {
        next.categories.insert(category);
    }
    next
}

/// Distinct categories present in `goals`, in first-seen order.
#[must_use]
pub fn available_categories(goals: &[Goal]) -> Vec<GoalCategory> {
    let mut seen = Vec::new();
    for goal in goals {
        if !seen.contains(&goal.category) {
            seen.push(goal.category);
        }
    }
    seen
}

/// Quick date-range choices offered next to the custom range picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRangePreset {
    AllTime,
    ThisMonth,
    ThisQuarter,
    ThisYear,
}

impl DateRangePreset {
    pub const ALL: [DateRangePreset; 4] =
        [Self::AllTime, Self::ThisMonth, Self::ThisQuarter, Self::ThisYear];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllTime => "All Time",
            Self::ThisMonth => "This Month",
            Self::ThisQuarter => "This Quarter",
            Self::ThisYear => "This Year",
        }
    }

    /// Range for this preset around `now`. `AllTime` has none.
    #[must_use]
    pub fn range(self, now: DateTime<Utc>) -> Option<DateRange> {
        let (year, month) = year_month(now);
        match self {
            Self::AllTime => None,
            Self::ThisMonth => months_range(year, month, 1),
            Self::ThisQuarter => months_range(year, quarter_start_month(month), 3),
            Self::ThisYear => months_range(now.year(), 1, 12),
        }
    }

    /// Copy of `filter` with this preset's range applied.
    #[must_use]
    pub fn apply(self, filter: &GoalFilter, now: DateTime<Utc>) -> GoalFilter {
        GoalFilter { date_range: self.range(now), ..filter.clone() }
    }
}

/// Header counters shown above the goal list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl GoalStats {
    pub fn from_goals<'a, I>(goals: I) -> Self
    where
        I: IntoIterator<Item = &'a Goal>,
    {
        goals.into_iter().fold(Self::default(), |mut stats, goal| {
            stats.total += 1;
            match goal.status {
                GoalStatus::Active => stats.active += 1,
                GoalStatus::Completed => stats.completed += 1,
                GoalStatus::Planned | GoalStatus::Archived => {}
            }
            stats
        })
    }
}
