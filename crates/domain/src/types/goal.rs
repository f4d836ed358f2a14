//! Goals: yearly objectives with a target date and progress percentage

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::notification::NotificationDraft;
use crate::constants::{MAX_PROGRESS, MIN_PROGRESS, PROGRESS_STEP};
use crate::entity::Entity;
use crate::impl_domain_enum_conversions;

/// Life area a goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Career,
    Health,
    #[default]
    Personal,
    Finance,
    Education,
    Relationship,
    Travel,
    Hobby,
}

impl_domain_enum_conversions!(GoalCategory {
    Career => "career",
    Health => "health",
    Personal => "personal",
    Finance => "finance",
    Education => "education",
    Relationship => "relationship",
    Travel => "travel",
    Hobby => "hobby",
});

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Planned,
    Active,
    Completed,
    Archived,
}

impl_domain_enum_conversions!(GoalStatus {
    Planned => "planned",
    Active => "active",
    Completed => "completed",
    Archived => "archived",
});

/// Direction of a one-click progress change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStep {
    Increment,
    Decrement,
}

impl ProgressStep {
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Increment => PROGRESS_STEP,
            Self::Decrement => -PROGRESS_STEP,
        }
    }
}

/// Clamp any requested progress into `0..=100`.
#[must_use]
pub fn clamp_progress(value: i32) -> u8 {
    // The clamp bounds fit in u8.
    u8::try_from(value.clamp(MIN_PROGRESS, MAX_PROGRESS)).unwrap_or_default()
}

/// Stored goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_date: DateTime<Utc>,
    #[serde(default)]
    pub category: GoalCategory,
    pub progress: u8,
    #[serde(default)]
    pub status: GoalStatus,
}

impl Goal {
    /// Calendar date of the target, in UTC.
    #[must_use]
    pub fn target_day(&self) -> NaiveDate {
        self.target_date.date_naive()
    }

    /// Progress after applying `step`, clamped.
    #[must_use]
    pub fn stepped_progress(&self, step: ProgressStep) -> u8 {
        clamp_progress(i32::from(self.progress) + step.delta())
    }

    #[must_use]
    pub fn can_increment(&self) -> bool {
        i32::from(self.progress) < MAX_PROGRESS
    }

    #[must_use]
    pub fn can_decrement(&self) -> bool {
        i32::from(self.progress) > MIN_PROGRESS
    }
}

/// Validated goal ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub target_date: DateTime<Utc>,
    pub category: GoalCategory,
    pub progress: u8,
    pub status: GoalStatus,
}

/// Partial goal update. Progress is clamped when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub category: Option<GoalCategory>,
    pub progress: Option<i32>,
    pub status: Option<GoalStatus>,
}

impl GoalPatch {
    #[must_use]
    pub fn progress(value: i32) -> Self {
        Self { progress: Some(value), ..Self::default() }
    }
}

impl From<NewGoal> for GoalPatch {
    fn from(goal: NewGoal) -> Self {
        Self {
            title: Some(goal.title),
            description: Some(goal.description),
            target_date: Some(goal.target_date),
            category: Some(goal.category),
            progress: Some(i32::from(goal.progress)),
            status: Some(goal.status),
        }
    }
}

impl Entity for Goal {
    type Draft = NewGoal;
    type Patch = GoalPatch;

    const KIND: &'static str = "goal";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(generated_id: String, draft: NewGoal, _now: DateTime<Utc>) -> Self {
        Self {
            id: generated_id,
            title: draft.title,
            description: draft.description,
            target_date: draft.target_date,
            category: draft.category,
            progress: clamp_progress(i32::from(draft.progress)),
            status: draft.status,
        }
    }

    fn apply_patch(&mut self, patch: GoalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(target_date) = patch.target_date {
            self.target_date = target_date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(progress) = patch.progress {
            self.progress = clamp_progress(progress);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Unvalidated goal form input.
///
/// Mirrors what a user typed: the target date is raw text and progress may be
/// out of range. Run it through validation before converting to [`NewGoal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub target_date: Option<String>,
    pub category: GoalCategory,
    pub progress: i32,
    pub status: GoalStatus,
    pub notifications: Vec<NotificationDraft>,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            target_date: None,
            category: GoalCategory::Personal,
            progress: 0,
            status: GoalStatus::Planned,
            notifications: Vec::new(),
        }
    }
}

impl GoalDraft {
    /// Prefill an edit form from a stored goal.
    #[must_use]
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            title: goal.title.clone(),
            description: goal.description.clone(),
            target_date: Some(goal.target_day().format("%Y-%m-%d").to_string()),
            category: goal.category,
            progress: i32::from(goal.progress),
            status: goal.status,
            notifications: Vec::new(),
        }
    }

    /// Parsed target date, when present and well-formed.
    #[must_use]
    pub fn parsed_target_date(&self) -> Option<NaiveDate> {
        self.target_date.as_deref().and_then(parse_target_date)
    }

    /// Convert into a storable goal. Returns `None` when the target date is
    /// missing or malformed; callers validate first.
    #[must_use]
    pub fn to_new_goal(&self) -> Option<NewGoal> {
        let date = self.parsed_target_date()?;
        Some(NewGoal {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            target_date: date.and_hms_opt(0, 0, 0)?.and_utc(),
            category: self.category,
            progress: clamp_progress(self.progress),
            status: self.status,
        })
    }
}

/// Parse a form date: `YYYY-MM-DD`, or the date part of an ISO datetime.
#[must_use]
pub fn parse_target_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split('T').next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
