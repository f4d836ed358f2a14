//! Calendar connections
//!
//! At most one calendar is connected at a time. Connecting a calendar (or
//! flagging one as connected) disconnects every other calendar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::entity::Entity;
use crate::impl_domain_enum_conversions;

/// Calendar provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    Google,
    Apple,
}

impl_domain_enum_conversions!(CalendarKind {
    Google => "google",
    Apple => "apple",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CalendarKind,
    pub name: String,
    pub connected: bool,
    pub last_sync: DateTime<Utc>,
}

/// Connection request. The calendar id is chosen by the user, not the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalendar {
    pub id: String,
    pub kind: CalendarKind,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPatch {
    pub name: Option<String>,
    pub connected: Option<bool>,
    pub last_sync: Option<DateTime<Utc>>,
}

impl Entity for Calendar {
    type Draft = NewCalendar;
    type Patch = CalendarPatch;

    const KIND: &'static str = "calendar";

    fn id(&self) -> &str {
        &self.id
    }

    /// New calendars are stored connected with `last_sync = now`.
    fn from_draft(_generated_id: String, draft: NewCalendar, now: DateTime<Utc>) -> Self {
        Self { id: draft.id, kind: draft.kind, name: draft.name, connected: true, last_sync: now }
    }

    fn apply_patch(&mut self, patch: CalendarPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(connected) = patch.connected {
            self.connected = connected;
        }
        if let Some(last_sync) = patch.last_sync {
            self.last_sync = last_sync;
        }
    }

    fn reconcile(items: &mut [Self], touched: usize) {
        if !items.get(touched).is_some_and(|c| c.connected) {
            return;
        }
        for (index, calendar) in items.iter_mut().enumerate() {
            if index != touched {
                calendar.connected = false;
            }
        }
    }
}
