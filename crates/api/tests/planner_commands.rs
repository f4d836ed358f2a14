//! Integration tests for planner, timeline and reminder commands

mod support;

use support::setup_test_context;
use yearflow_core::reminders::{DueLabel, Urgency};
use yearflow_core::timeline::MonthMarker;
use yearflow_lib::{get_active_reminders, get_month_detail, get_timeline, load_planner};

#[tokio::test]
async fn load_planner_returns_snapshot_stats_and_reminders() {
    let test = setup_test_context();

    let overview = load_planner(&test.ctx).await.unwrap();

    assert_eq!(overview.snapshot.goals.len(), 3);
    assert_eq!(overview.snapshot.events.len(), 2);
    assert_eq!(overview.snapshot.notifications.len(), 3);
    assert_eq!((overview.stats.total, overview.stats.active, overview.stats.completed), (3, 1, 1));

    assert_eq!(overview.reminders.len(), 1);
    let reminder = &overview.reminders[0];
    assert_eq!(reminder.notification.id, "n-launch-3d");
    assert_eq!(reminder.days_until, 3);
    assert_eq!(reminder.due, DueLabel::InDays(3));
    assert_eq!(reminder.due_label, "In 3 days");
    assert_eq!(reminder.urgency, Urgency::Elevated);
}

#[tokio::test]
async fn reminders_are_recomputed_on_every_call() {
    let test = setup_test_context();
    assert_eq!(get_active_reminders(&test.ctx).await.unwrap()[0].days_until, 3);

    test.clock.advance(chrono::Duration::days(2));
    let reminders = get_active_reminders(&test.ctx).await.unwrap();

    assert_eq!(reminders[0].days_until, 1);
    assert_eq!(reminders[0].due, DueLabel::Tomorrow);
}

#[tokio::test]
async fn timeline_defaults_to_the_current_year() {
    let test = setup_test_context();

    let timeline = get_timeline(&test.ctx, None).await.unwrap();

    assert_eq!(timeline.year, 2026);
    assert_eq!(timeline.months.len(), 12);

    let march = &timeline.months[2];
    assert_eq!((march.goal_count, march.event_count), (1, 1));
    assert!(march.is_current);

    let june = &timeline.months[5];
    assert_eq!((june.goal_count, june.event_count), (1, 1));
    assert!(!june.is_current);

    let busy: usize = timeline.months.iter().map(|m| m.goal_count + m.event_count).sum();
    assert_eq!(busy, 5);
}

#[tokio::test]
async fn timeline_for_another_year_is_empty() {
    let test = setup_test_context();

    let timeline = get_timeline(&test.ctx, Some(2027)).await.unwrap();

    assert!(timeline.months.iter().all(|m| m.goal_count == 0 && m.event_count == 0));
    assert!(timeline.months.iter().all(|m| !m.is_current));
}

#[tokio::test]
async fn month_detail_lists_goals_and_events() {
    let test = setup_test_context();

    let detail = get_month_detail(&test.ctx, MonthMarker { year: 2026, month: 6 }).await.unwrap();

    assert_eq!(detail.goals.len(), 1);
    assert_eq!(detail.goals[0].id, "g-run");
    assert_eq!(detail.events.len(), 1);
    assert_eq!(detail.events[0].title, "Race day");

    let empty = get_month_detail(&test.ctx, MonthMarker { year: 2026, month: 8 }).await.unwrap();
    assert!(empty.is_empty());
}
