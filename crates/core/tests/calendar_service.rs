//! Calendar connection tests

mod support;

use std::time::Duration;

use yearflow_core::ConnectCalendarRequest;
use yearflow_domain::constants::FIELD_CALENDAR_ID;
use yearflow_domain::{CalendarKind, ValidationIssue, YearFlowError};

use support::fixtures::Harness;

fn google(id: &str) -> ConnectCalendarRequest {
    ConnectCalendarRequest { calendar_id: id.into(), kind: CalendarKind::Google }
}

#[tokio::test]
async fn connecting_second_calendar_disconnects_first() {
    let harness = Harness::new();
    let service = harness.calendar_service();

    let a = service.connect(&google("work@gmail.com")).await.unwrap();
    assert!(a.connected);
    assert_eq!(a.name, "work");

    let b = service
        .connect(&ConnectCalendarRequest {
            calendar_id: "A1B2C3D4-E5F6".into(),
            kind: CalendarKind::Apple,
        })
        .await
        .unwrap();
    assert_eq!(b.name, "Apple Calendar (A1B2C3D4...)");

    let all = service.list_calendars().await.unwrap();
    let connected: Vec<_> = all.iter().filter(|c| c.connected).map(|c| c.id.as_str()).collect();
    assert_eq!(connected, ["A1B2C3D4-E5F6"]);
    assert_eq!(service.connected_calendar().await.unwrap().unwrap().id, b.id);
}

#[tokio::test]
async fn reconnecting_existing_calendar_does_not_duplicate_it() {
    let harness = Harness::new();
    let service = harness.calendar_service();

    service.connect(&google("home@gmail.com")).await.unwrap();
    service.connect(&google("team@group.calendar.google.com")).await.unwrap();
    let again = service.connect(&google("home@gmail.com")).await.unwrap();

    assert!(again.connected);
    assert_eq!(harness.calendars.snapshot().len(), 2);
    assert_eq!(harness.calendars.snapshot().iter().filter(|c| c.connected).count(), 1);
}

#[tokio::test]
async fn malformed_id_is_rejected_without_storing() {
    let harness = Harness::new();
    let service = harness.calendar_service();

    let err = service.connect(&google("not-an-email")).await.unwrap_err();
    assert_eq!(
        err.validation_errors().unwrap().issue(FIELD_CALENDAR_ID),
        Some(ValidationIssue::InvalidFormat)
    );
    assert!(harness.calendars.snapshot().is_empty());
}

#[tokio::test]
async fn disconnect_keeps_calendar_listed() {
    let harness = Harness::new();
    let service = harness.calendar_service();
    let calendar = service.connect(&google("me@gmail.com")).await.unwrap();

    let after = service.disconnect(&calendar.id).await.unwrap();
    assert!(!after.connected);
    assert!(service.connected_calendar().await.unwrap().is_none());
    assert_eq!(service.list_calendars().await.unwrap().len(), 1);

    let err = service.disconnect("unknown").await.unwrap_err();
    assert!(matches!(err, YearFlowError::NotFound(_)));
}

#[tokio::test(start_paused = true)]
async fn connect_waits_for_handshake() {
    let harness = Harness::new();
    let service = harness.calendar_service().with_connect_delay(Duration::from_millis(2000));

    let started = tokio::time::Instant::now();
    service.connect(&google("me@gmail.com")).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(2000));
}
