//! Notification scheduling
//!
//! A notification is active when it is enabled and its date lies 0 to 7 whole
//! days ahead of the reference instant. Due labels and urgency classify the
//! same day count for display only. Nothing is cached: callers pass `now` on
//! every call.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use yearflow_domain::constants::{
    ACTIVE_NOTIFICATION_HORIZON_DAYS, URGENCY_CRITICAL_DAYS, URGENCY_ELEVATED_DAYS,
    URGENCY_HIGH_DAYS,
};
use yearflow_domain::Notification;

const MS_PER_DAY: i64 = 86_400_000;

/// Whole days from `now` until `date` at 00:00 UTC, rounded up.
///
/// Any part of a day still ahead counts as a full day, so a reminder dated
/// tomorrow is 1 day away all through today, and one dated today is 0 days
/// away once midnight has passed.
#[must_use]
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let target = date.and_time(NaiveTime::MIN).and_utc();
    let diff_ms = (target - now).num_milliseconds();
    let days = diff_ms.div_euclid(MS_PER_DAY);
    if diff_ms.rem_euclid(MS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// Enabled and due within the horizon, never in the past.
#[must_use]
pub fn is_active(notification: &Notification, now: DateTime<Utc>) -> bool {
    notification.enabled
        && (0..=ACTIVE_NOTIFICATION_HORIZON_DAYS)
            .contains(&days_until(notification.timing.date, now))
}

/// Notifications to surface at `now`, in input order.
#[must_use]
pub fn active_notifications<'a>(
    notifications: &'a [Notification],
    now: DateTime<Utc>,
) -> Vec<&'a Notification> {
    notifications.iter().filter(|n| is_active(n, now)).collect()
}

/// Human label for a distance in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "days", rename_all = "camelCase")]
pub enum DueLabel {
    Overdue,
    Today,
    Tomorrow,
    InDays(i64),
}

impl DueLabel {
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Self::Overdue,
            0 => Self::Today,
            1 => Self::Tomorrow,
            d => Self::InDays(d),
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue => f.write_str("Overdue"),
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::InDays(days) => write!(f, "In {days} days"),
        }
    }
}

/// Visual weight of a reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Elevated,
    Normal,
}

impl Urgency {
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        if days <= URGENCY_CRITICAL_DAYS {
            Self::Critical
        } else if days <= URGENCY_HIGH_DAYS {
            Self::High
        } else if days <= URGENCY_ELEVATED_DAYS {
            Self::Elevated
        } else {
            Self::Normal
        }
    }
}

/// Active notification annotated for the notification panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReminder {
    pub notification: Notification,
    pub days_until: i64,
    pub due: DueLabel,
    pub due_label: String,
    pub urgency: Urgency,
    pub timing: String,
}

impl ScheduledReminder {
    #[must_use]
    pub fn new(notification: &Notification, now: DateTime<Utc>) -> Self {
        let days = days_until(notification.timing.date, now);
        let due = DueLabel::from_days(days);
        Self {
            notification: notification.clone(),
            days_until: days,
            due,
            due_label: due.to_string(),
            urgency: Urgency::from_days(days),
            timing: notification.timing_description(),
        }
    }
}

/// Active notifications at `now`, annotated, in input order.
#[must_use]
pub fn reminder_digest(notifications: &[Notification], now: DateTime<Utc>) -> Vec<ScheduledReminder> {
    active_notifications(notifications, now)
        .into_iter()
        .map(|n| ScheduledReminder::new(n, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use yearflow_domain::{NotificationKind, NotificationTiming};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 10, 9, 30, 0).unwrap()
    }

    fn notification(id: &str, offset_days: i64, enabled: bool) -> Notification {
        Notification {
            id: id.into(),
            goal_id: Some("g-1".into()),
            kind: NotificationKind::Before,
            timing: NotificationTiming {
                days: Some(7),
                date: now().date_naive() + Duration::days(offset_days),
            },
            message: format!("reminder {id}"),
            enabled,
        }
    }

    #[test]
    fn days_until_rounds_partial_days_up() {
        let today = now().date_naive();
        assert_eq!(days_until(today, now()), 0);
        assert_eq!(days_until(today + Duration::days(1), now()), 1);
        assert_eq!(days_until(today - Duration::days(1), now()), -1);
        let midnight = today.and_time(NaiveTime::MIN).and_utc();
        assert_eq!(days_until(today + Duration::days(3), midnight), 3);
    }

    #[test]
    fn horizon_boundaries() {
        let items = vec![
            notification("seven", 7, true),
            notification("eight", 8, true),
            notification("yesterday", -1, true),
            notification("today", 0, true),
        ];
        let active: Vec<_> = active_notifications(&items, now()).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(active, ["seven", "today"]);
    }

    #[test]
    fn disabled_notifications_never_surface() {
        let items = vec![
            notification("soon", 3, true),
            notification("later", 10, true),
            notification("off", 1, false),
        ];
        let active = active_notifications(&items, now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "soon");
    }

    #[test]
    fn labels_and_urgency() {
        assert_eq!(DueLabel::from_days(-2).to_string(), "Overdue");
        assert_eq!(DueLabel::from_days(0).to_string(), "Today");
        assert_eq!(DueLabel::from_days(1).to_string(), "Tomorrow");
        assert_eq!(DueLabel::from_days(5).to_string(), "In 5 days");

        assert_eq!(Urgency::from_days(0), Urgency::Critical);
        assert_eq!(Urgency::from_days(1), Urgency::High);
        assert_eq!(Urgency::from_days(3), Urgency::Elevated);
        assert_eq!(Urgency::from_days(4), Urgency::Normal);
    }

    #[test]
    fn digest_annotates_active_set() {
        let items = vec![notification("a", 1, true), notification("b", 12, true)];
        let digest = reminder_digest(&items, now());
        assert_eq!(digest.len(), 1);
        assert_eq!(digest[0].days_until, 1);
        assert_eq!(digest[0].due_label, "Tomorrow");
        assert_eq!(digest[0].urgency, Urgency::High);
        assert_eq!(digest[0].timing, "7 days before");
    }
}
