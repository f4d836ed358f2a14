//! Shared setup for command integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;
use yearflow_core::FixedClock;
use yearflow_domain::{CalendarConfig, Config, LatencyConfig, StorageConfig};
use yearflow_lib::AppContext;

/// 2026-03-10 09:00 UTC, a Tuesday.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
}

/// Seed shared by the command tests.
///
/// `n-launch-3d` is the only notification due within a week of `now()`.
pub const SEED_JSON: &str = r#"{
    "calendars": [
        { "id": "me@gmail.com", "type": "google", "name": "me",
          "connected": true, "lastSync": "2026-03-01T08:00:00Z" }
    ],
    "goals": [
        { "id": "g-launch", "title": "Ship the beta", "description": "",
          "targetDate": "2026-03-13T00:00:00Z", "category": "career",
          "progress": 40, "status": "active" },
        { "id": "g-run", "title": "Half marathon", "description": "Spring race",
          "targetDate": "2026-06-20T00:00:00Z", "category": "health",
          "progress": 100, "status": "completed" },
        { "id": "g-read", "title": "Read 20 books", "description": "",
          "targetDate": "2026-11-30T00:00:00Z", "category": "education",
          "progress": 0, "status": "planned" }
    ],
    "events": [
        { "id": "e-offsite", "title": "Team offsite", "date": "2026-03-20" },
        { "id": "e-race", "title": "Race day", "date": "2026-06-01" }
    ],
    "notifications": [
        { "id": "n-launch-3d", "goalId": "g-launch", "type": "before",
          "timing": { "days": 3, "date": "2026-03-13" },
          "message": "Beta is close", "enabled": true },
        { "id": "n-read", "goalId": "g-read", "type": "before",
          "timing": { "days": 7, "date": "2026-11-30" },
          "message": "Count the books", "enabled": true },
        { "id": "n-launch-eve", "goalId": "g-launch", "type": "on",
          "timing": { "date": "2026-03-11" },
          "message": "Freeze the branch", "enabled": false }
    ]
}"#;

/// Context over the seeded stores with latency off and a fixed clock.
pub struct TestContext {
    pub ctx: AppContext,
    pub clock: Arc<FixedClock>,
    /// Keeps the seed file alive for the lifetime of the context.
    _temp_dir: TempDir,
}

pub fn test_config(seed_path: Option<PathBuf>) -> Config {
    Config {
        storage: StorageConfig {
            seed_path: seed_path.map(|p| p.to_string_lossy().into_owned()),
            latency: LatencyConfig { enabled: false, ..LatencyConfig::default() },
        },
        calendar: CalendarConfig { connect_delay_ms: 0 },
        ..Config::default()
    }
}

pub fn write_seed(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("seed.json");
    std::fs::write(&path, contents).expect("failed to write seed file");
    path
}

pub fn setup_test_context() -> TestContext {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let seed_path = write_seed(&temp_dir, SEED_JSON);
    let clock = Arc::new(FixedClock::new(now()));

    let ctx = AppContext::new_with_clock(test_config(Some(seed_path)), clock.clone())
        .expect("failed to create test context");

    TestContext { ctx, clock, _temp_dir: temp_dir }
}
