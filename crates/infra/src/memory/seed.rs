//! Initial store contents from a JSON seed file
//!
//! ```json
//! { "calendars": [], "goals": [], "events": [], "notifications": [] }
//! ```
//!
//! Every collection is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use yearflow_domain::constants::{MAX_BEFORE_DAYS, MAX_PROGRESS, MIN_BEFORE_DAYS};
use yearflow_domain::{
    Calendar, CalendarEvent, Goal, Notification, NotificationKind, Result, YearFlowError,
};

use crate::errors::InfraError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub calendars: Vec<Calendar>,
    pub goals: Vec<Goal>,
    pub events: Vec<CalendarEvent>,
    pub notifications: Vec<Notification>,
}

impl SeedData {
    /// Parse seed JSON.
    ///
    /// # Errors
    /// `YearFlowError::InvalidInput` for malformed JSON, and
    /// `YearFlowError::Config` when an entry breaks an entity invariant: more
    /// than one connected calendar, goal progress above 100, a blank
    /// notification message, or `before` days outside `1..=365`.
    pub fn from_json(contents: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(contents).map_err(InfraError::from)?;
        seed.check()?;
        Ok(seed)
    }

    /// Read and parse the seed file at `path`.
    ///
    /// # Errors
    /// `YearFlowError::Storage` when the file cannot be read, otherwise as
    /// [`SeedData::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(InfraError::from)?;
        let seed = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            calendars = seed.calendars.len(),
            goals = seed.goals.len(),
            events = seed.events.len(),
            notifications = seed.notifications.len(),
            "Seed data loaded"
        );
        Ok(seed)
    }

    fn check(&self) -> Result<()> {
        let connected = self.calendars.iter().filter(|c| c.connected).count();
        if connected > 1 {
            return Err(YearFlowError::Config(format!(
                "seed data has {connected} connected calendars, at most one is allowed"
            )));
        }

        if let Some(goal) = self.goals.iter().find(|g| i32::from(g.progress) > MAX_PROGRESS) {
            return Err(YearFlowError::Config(format!(
                "seed goal {} has progress {}, expected 0..={MAX_PROGRESS}",
                goal.id, goal.progress
            )));
        }

        for notification in &self.notifications {
            check_notification(notification)?;
        }
        Ok(())
    }
}

fn check_notification(notification: &Notification) -> Result<()> {
    if notification.message.trim().is_empty() {
        return Err(YearFlowError::Config(format!(
            "seed notification {} has an empty message",
            notification.id
        )));
    }

    if notification.kind == NotificationKind::Before {
        let in_range = notification.timing.days.is_some_and(|days| {
            i32::try_from(days).is_ok_and(|d| (MIN_BEFORE_DAYS..=MAX_BEFORE_DAYS).contains(&d))
        });
        if !in_range {
            return Err(YearFlowError::Config(format!(
                "seed notification {} is a before reminder without days in \
                 {MIN_BEFORE_DAYS}..={MAX_BEFORE_DAYS}",
                notification.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_collections_default_to_empty() {
        let seed = SeedData::from_json(r#"{ "events": [ { "id": "e1", "date": "2026-05-01" } ] }"#)
            .unwrap();
        assert_eq!(seed.events.len(), 1);
        assert_eq!(seed.events[0].title, "");
        assert!(seed.goals.is_empty());
    }

    #[test]
    fn parses_wire_field_names() {
        let json = r#"{
            "goals": [{
                "id": "g1", "title": "Learn piano", "description": "",
                "targetDate": "2026-09-01T00:00:00Z", "category": "hobby",
                "progress": 30, "status": "active"
            }],
            "notifications": [{
                "id": "n1", "goalId": "g1", "type": "before",
                "timing": { "days": 7, "date": "2026-09-01" },
                "message": "Practice scales", "enabled": true
            }],
            "calendars": [{
                "id": "me@gmail.com", "type": "google", "name": "me",
                "connected": true, "lastSync": "2026-01-01T00:00:00Z"
            }]
        }"#;
        let seed = SeedData::from_json(json).unwrap();
        assert_eq!(seed.goals[0].progress, 30);
        assert_eq!(seed.notifications[0].goal_id.as_deref(), Some("g1"));
        assert!(seed.calendars[0].connected);
    }

    #[test]
    fn rejects_two_connected_calendars() {
        let json = r#"{ "calendars": [
            { "id": "a", "type": "google", "name": "a", "connected": true, "lastSync": "2026-01-01T00:00:00Z" },
            { "id": "b", "type": "apple", "name": "b", "connected": true, "lastSync": "2026-01-01T00:00:00Z" }
        ] }"#;
        assert!(matches!(SeedData::from_json(json), Err(YearFlowError::Config(_))));
    }

    fn notification_json(kind: &str, days: &str, message: &str) -> String {
        format!(
            r#"{{ "notifications": [{{
                "id": "n1", "goalId": "g1", "type": "{kind}",
                "timing": {{ {days}"date": "2026-09-01" }},
                "message": "{message}", "enabled": true
            }}] }}"#
        )
    }

    #[test]
    fn rejects_goal_progress_above_hundred() {
        let json = r#"{ "goals": [{
            "id": "g1", "title": "Overdone", "targetDate": "2026-09-01T00:00:00Z",
            "progress": 150, "status": "active"
        }] }"#;
        let err = SeedData::from_json(json).unwrap_err();
        assert!(matches!(err, YearFlowError::Config(ref msg) if msg.contains("g1")));
    }

    #[test]
    fn accepts_progress_at_the_upper_bound() {
        let json = r#"{ "goals": [{
            "id": "g1", "title": "Done", "targetDate": "2026-09-01T00:00:00Z",
            "progress": 100, "status": "completed"
        }] }"#;
        assert_eq!(SeedData::from_json(json).unwrap().goals[0].progress, 100);
    }

    #[test]
    fn rejects_before_reminder_days_out_of_range() {
        for days in [r#""days": 0, "#, r#""days": 366, "#, ""] {
            let result = SeedData::from_json(&notification_json("before", days, "Prepare"));
            assert!(matches!(result, Err(YearFlowError::Config(_))), "days fragment {days:?}");
        }
        let bounds = [r#""days": 1, "#, r#""days": 365, "#];
        for days in bounds {
            assert!(SeedData::from_json(&notification_json("before", days, "Prepare")).is_ok());
        }
    }

    #[test]
    fn on_reminders_need_no_days() {
        let seed = SeedData::from_json(&notification_json("on", "", "Go")).unwrap();
        assert_eq!(seed.notifications[0].timing.days, None);
    }

    #[test]
    fn rejects_blank_notification_message() {
        let result = SeedData::from_json(&notification_json("on", "", "  "));
        assert!(matches!(result, Err(YearFlowError::Config(_))));
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        assert!(matches!(SeedData::from_json("{"), Err(YearFlowError::InvalidInput(_))));
    }

    #[test]
    fn missing_file_is_storage_error() {
        let err = SeedData::load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, YearFlowError::Storage(_)));
    }
}
