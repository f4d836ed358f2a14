//! Calendar events shown on the timeline (read-only in practice)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalendarEvent {
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Entity for CalendarEvent {
    type Draft = NewCalendarEvent;
    type Patch = CalendarEventPatch;

    const KIND: &'static str = "event";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(generated_id: String, draft: NewCalendarEvent, _now: DateTime<Utc>) -> Self {
        Self { id: generated_id, title: draft.title, date: draft.date }
    }

    fn apply_patch(&mut self, patch: CalendarEventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}
