//! Goal filter state (session-scoped, never persisted)

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::goal::{GoalCategory, GoalStatus};

const ALL_STATUSES: &str = "all";

/// Status predicate: every status, or exactly one.
///
/// Travels as `"all"` or a status name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(GoalStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: GoalStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Inclusive instant range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalFilter {
    pub categories: BTreeSet<GoalCategory>,
    pub status: StatusFilter,
    pub date_range: Option<DateRange>,
}

impl GoalFilter {
    /// True when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active predicate groups (categories, status, date range).
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(!self.categories.is_empty())
            + usize::from(self.status != StatusFilter::All)
            + usize::from(self.date_range.is_some())
    }

    /// Reset every predicate.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_STATUSES),
            Self::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_STATUSES) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
