//! Application context - dependency injection container
//!
//! Owns the repositories and wires them into the services. Repositories are
//! created here and handed to services as trait objects; nothing else
//! constructs stores.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use yearflow_core::storage::ports::{CalendarRepository, NotificationRepository, Repository};
use yearflow_core::{CalendarService, Clock, GoalService, PlannerService, SystemClock};
use yearflow_domain::{CalendarEvent, Config, Goal, Result};
use yearflow_infra::MemoryStores;

/// Type alias for goal repository port trait object
type DynGoalRepository = dyn Repository<Goal>;

/// Type alias for event repository port trait object
type DynEventRepository = dyn Repository<CalendarEvent>;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub clock: Arc<dyn Clock>,

    // Repositories
    pub goal_repository: Arc<DynGoalRepository>,
    pub event_repository: Arc<DynEventRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub calendar_repository: Arc<dyn CalendarRepository>,

    // Services
    pub goals: Arc<GoalService>,
    pub calendars: Arc<CalendarService>,
    pub planner: Arc<PlannerService>,
}

impl AppContext {
    /// Build the context from configuration loaded from the environment or
    /// config files.
    ///
    /// # Errors
    /// `YearFlowError::Config` for unreadable configuration, plus the seed
    /// errors of [`AppContext::new_with_clock`].
    pub fn new() -> Result<Self> {
        let config = yearflow_infra::config::load()?;
        Self::new_with_config(config)
    }

    /// Build the context from an explicit configuration, on the system clock.
    ///
    /// # Errors
    /// Same as [`AppContext::new_with_clock`].
    pub fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_clock(config, Arc::new(SystemClock))
    }

    /// Build the context with an injected clock (tests, replays).
    ///
    /// # Errors
    /// Seed file failures: `Storage` when it cannot be read, `InvalidInput`
    /// for malformed JSON, `Config` when an entry breaks an entity invariant.
    pub fn new_with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let stores = MemoryStores::from_config(&config.storage, clock.clone())?;

        let goal_repository: Arc<DynGoalRepository> = stores.goals;
        let event_repository: Arc<DynEventRepository> = stores.events;
        let notification_repository: Arc<dyn NotificationRepository> = stores.notifications;
        let calendar_repository: Arc<dyn CalendarRepository> = stores.calendars;

        let goals = Arc::new(GoalService::new(
            goal_repository.clone(),
            notification_repository.clone(),
            clock.clone(),
        ));
        let calendars = Arc::new(
            CalendarService::new(calendar_repository.clone(), clock.clone())
                .with_connect_delay(Duration::from_millis(config.calendar.connect_delay_ms)),
        );
        let planner = Arc::new(PlannerService::new(
            goal_repository.clone(),
            event_repository.clone(),
            notification_repository.clone(),
        ));

        info!(
            seeded = config.storage.seed_path.is_some(),
            latency = config.storage.latency.enabled,
            "Application context ready"
        );

        Ok(Self {
            config,
            clock,
            goal_repository,
            event_repository,
            notification_repository,
            calendar_repository,
            goals,
            calendars,
            planner,
        })
    }
}
