//! Goal, notification and calendar form validation
//!
//! Validators are synchronous and side-effect free. They return a
//! [`ValidationErrors`] mapping; an empty mapping means the input is valid.

use chrono::NaiveDate;
use uuid::Uuid;
use yearflow_domain::constants::{
    APPLE_NAME_PREFIX_CHARS, FIELD_CALENDAR_ID, FIELD_DAYS, FIELD_MESSAGE, FIELD_PROGRESS,
    FIELD_TARGET_DATE, FIELD_TITLE, GMAIL_SUFFIX, GOOGLE_GROUP_CALENDAR_SUFFIX, MAX_BEFORE_DAYS,
    MAX_PROGRESS, MIN_APPLE_CALENDAR_ID_LENGTH, MIN_BEFORE_DAYS, MIN_PROGRESS,
};
use yearflow_domain::{
    parse_target_date, CalendarKind, GoalDraft, NotificationDraft, NotificationKind,
    ValidationErrors, ValidationIssue,
};

/// Check a goal form against `today` (date-only comparison).
#[must_use]
pub fn validate_goal_draft(draft: &GoalDraft, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.title.trim().is_empty() {
        errors.insert(FIELD_TITLE, ValidationIssue::EmptyField, "Title is required");
    }

    match draft.target_date.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        None => errors.insert(
            FIELD_TARGET_DATE,
            ValidationIssue::MissingField,
            "Target date is required",
        ),
        Some(raw) => match parse_target_date(raw) {
            None => errors.insert(
                FIELD_TARGET_DATE,
                ValidationIssue::InvalidDate,
                "Target date is not a valid date",
            ),
            Some(date) if date < today => errors.insert(
                FIELD_TARGET_DATE,
                ValidationIssue::PastDate,
                "Target date cannot be in the past",
            ),
            Some(_) => {}
        },
    }

    if !(MIN_PROGRESS..=MAX_PROGRESS).contains(&draft.progress) {
        errors.insert(
            FIELD_PROGRESS,
            ValidationIssue::OutOfRange,
            "Progress must be between 0 and 100",
        );
    }

    errors
}

/// Check a notification row of the goal form.
#[must_use]
pub fn validate_notification_draft(draft: &NotificationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.message.trim().is_empty() {
        errors.insert(FIELD_MESSAGE, ValidationIssue::EmptyMessage, "Notification message is required");
    }

    if draft.kind == NotificationKind::Before
        && !draft.days.is_some_and(|days| (MIN_BEFORE_DAYS..=MAX_BEFORE_DAYS).contains(&days))
    {
        errors.insert(FIELD_DAYS, ValidationIssue::OutOfRange, "Days must be between 1 and 365");
    }

    errors
}

/// Append `notification` to the goal form when it is valid.
///
/// On failure the form is left untouched and the errors are returned. A
/// blank draft id is replaced with a fresh one so the row can be removed
/// later.
pub fn add_notification(draft: &mut GoalDraft, mut notification: NotificationDraft) -> ValidationErrors {
    let errors = validate_notification_draft(&notification);
    if !errors.is_empty() {
        return errors;
    }
    if notification.id.trim().is_empty() {
        notification.id = Uuid::new_v4().to_string();
    }
    draft.notifications.push(notification);
    errors
}

/// Drop the notification row with draft id `id`. Returns whether one was removed.
pub fn remove_notification(draft: &mut GoalDraft, id: &str) -> bool {
    let before = draft.notifications.len();
    draft.notifications.retain(|n| n.id != id);
    draft.notifications.len() != before
}

/// Check a calendar id typed into the connect dialog.
#[must_use]
pub fn validate_calendar_id(calendar_id: &str, kind: CalendarKind) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let id = calendar_id.trim();

    if id.is_empty() {
        errors.insert(FIELD_CALENDAR_ID, ValidationIssue::MissingField, "Calendar ID is required");
        return errors;
    }

    match kind {
        CalendarKind::Google => {
            let valid = id.contains('@')
                && (id.ends_with(GOOGLE_GROUP_CALENDAR_SUFFIX) || id.ends_with(GMAIL_SUFFIX));
            if !valid {
                errors.insert(
                    FIELD_CALENDAR_ID,
                    ValidationIssue::InvalidFormat,
                    "Invalid Google Calendar ID format (e.g., your-calendar@gmail.com)",
                );
            }
        }
        CalendarKind::Apple => {
            let valid = id.len() >= MIN_APPLE_CALENDAR_ID_LENGTH
                && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !valid {
                errors.insert(
                    FIELD_CALENDAR_ID,
                    ValidationIssue::InvalidFormat,
                    "Invalid Apple Calendar ID format (alphanumeric with dashes)",
                );
            }
        }
    }

    errors
}

/// Name shown for a freshly connected calendar.
#[must_use]
pub fn calendar_display_name(calendar_id: &str, kind: CalendarKind) -> String {
    let id = calendar_id.trim();
    match kind {
        CalendarKind::Google => id.split('@').next().unwrap_or(id).to_string(),
        CalendarKind::Apple => {
            let prefix: String = id.chars().take(APPLE_NAME_PREFIX_CHARS).collect();
            format!("Apple Calendar ({prefix}...)")
        }
    }
}
