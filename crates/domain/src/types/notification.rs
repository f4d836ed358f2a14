//! Notifications: reminders tied to a goal's target date
//!
//! The notification store is the only place notifications live. A goal's
//! reminder list is derived by filtering on `goal_id`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::DEFAULT_BEFORE_DAYS;
use crate::entity::Entity;
use crate::impl_domain_enum_conversions;

/// When a notification fires relative to its date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// A number of days ahead of the date.
    #[default]
    Before,
    /// On the date itself.
    On,
    Recurring,
}

impl_domain_enum_conversions!(NotificationKind {
    Before => "before",
    On => "on",
    Recurring => "recurring",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NotificationTiming {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    pub date: NaiveDate,
}

/// Stored notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// Owning goal. Non-owning back-reference; absent for free-standing
    /// reminders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timing: NotificationTiming,
    pub message: String,
    pub enabled: bool,
}

impl Notification {
    #[must_use]
    pub fn belongs_to(&self, goal_id: &str) -> bool {
        self.goal_id.as_deref() == Some(goal_id)
    }

    /// Short description of the timing for list rows.
    #[must_use]
    pub fn timing_description(&self) -> String {
        match self.kind {
            NotificationKind::Before => {
                format!("{} days before", self.timing.days.unwrap_or_default())
            }
            NotificationKind::On => "On target date".to_string(),
            NotificationKind::Recurring => "Recurring reminder".to_string(),
        }
    }
}

/// Notification ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub goal_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timing: NotificationTiming,
    pub message: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPatch {
    pub goal_id: Option<Option<String>>,
    pub kind: Option<NotificationKind>,
    pub timing: Option<NotificationTiming>,
    pub message: Option<String>,
    pub enabled: Option<bool>,
}

impl Entity for Notification {
    type Draft = NewNotification;
    type Patch = NotificationPatch;

    const KIND: &'static str = "notification";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(generated_id: String, draft: NewNotification, _now: DateTime<Utc>) -> Self {
        Self {
            id: generated_id,
            goal_id: draft.goal_id,
            kind: draft.kind,
            timing: draft.timing,
            message: draft.message,
            enabled: draft.enabled,
        }
    }

    fn apply_patch(&mut self, patch: NotificationPatch) {
        if let Some(goal_id) = patch.goal_id {
            self.goal_id = goal_id;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(timing) = patch.timing {
            self.timing = timing;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
    }
}

/// Unvalidated notification form input attached to a goal draft.
///
/// The date is not part of the draft: it is taken from the goal's target
/// date when the goal is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationDraft {
    /// Draft-local id, used to remove the row before the goal is saved.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub days: Option<i32>,
    pub message: String,
    pub enabled: bool,
}

impl Default for NotificationDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: NotificationKind::Before,
            days: Some(DEFAULT_BEFORE_DAYS),
            message: String::new(),
            enabled: true,
        }
    }
}

impl NotificationDraft {
    /// Convert into a storable notification for `goal_id`, dated on the
    /// goal's target day. Days are only kept for `before` reminders.
    #[must_use]
    pub fn to_new_notification(&self, goal_id: Option<String>, date: NaiveDate) -> NewNotification {
        let days = match self.kind {
            NotificationKind::Before => self.days.and_then(|d| u32::try_from(d).ok()),
            NotificationKind::On | NotificationKind::Recurring => None,
        };
        NewNotification {
            goal_id,
            kind: self.kind,
            timing: NotificationTiming { days, date },
            message: self.message.trim().to_string(),
            enabled: self.enabled,
        }
    }
}
