//! In-memory storage adapters
//!
//! Stand-ins for a remote backend: four independent collections with
//! simulated latency, optionally pre-filled from a seed file.

pub mod seed;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use yearflow_core::Clock;
use yearflow_domain::{Calendar, CalendarEvent, Goal, Notification, Result, StorageConfig};

pub use seed::SeedData;
pub use store::{InMemoryStore, Operation, StoreLatency};

/// The four collections, shared behind `Arc`s
#[derive(Clone)]
pub struct MemoryStores {
    pub calendars: Arc<InMemoryStore<Calendar>>,
    pub goals: Arc<InMemoryStore<Goal>>,
    pub events: Arc<InMemoryStore<CalendarEvent>>,
    pub notifications: Arc<InMemoryStore<Notification>>,
}

impl MemoryStores {
    /// Stores filled from `seed`, all sharing `latency` and `clock`.
    #[must_use]
    pub fn seeded(seed: SeedData, latency: StoreLatency, clock: Arc<dyn Clock>) -> Self {
        Self {
            calendars: Arc::new(
                InMemoryStore::with_items(seed.calendars, latency).with_clock(clock.clone()),
            ),
            goals: Arc::new(InMemoryStore::with_items(seed.goals, latency).with_clock(clock.clone())),
            events: Arc::new(
                InMemoryStore::with_items(seed.events, latency).with_clock(clock.clone()),
            ),
            notifications: Arc::new(
                InMemoryStore::with_items(seed.notifications, latency).with_clock(clock),
            ),
        }
    }

    /// Build the stores described by `config`, reading its seed file if set.
    ///
    /// # Errors
    /// Propagates seed file read and parse failures.
    pub fn from_config(config: &StorageConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let seed = match config.seed_path.as_deref() {
            Some(path) => SeedData::load(Path::new(path))?,
            None => SeedData::default(),
        };
        Ok(Self::seeded(seed, StoreLatency::from(&config.latency), clock))
    }
}
