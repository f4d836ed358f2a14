//! Latency-simulating in-memory repository
//!
//! One [`InMemoryStore`] holds one collection. Every operation first waits
//! out its configured latency, then runs atomically under the store's
//! `RwLock`. There is no versioning: concurrent updates are last-write-wins.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;
use yearflow_core::storage::ports::{CalendarRepository, NotificationRepository, Repository};
use yearflow_core::{Clock, SystemClock};
use yearflow_domain::{Calendar, Entity, LatencyConfig, Notification, Result, YearFlowError};

/// Repository operation, used to pick the simulated latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
}

/// Per-operation delays derived from [`LatencyConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreLatency {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl StoreLatency {
    /// No delay for any operation.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delay(&self, operation: Operation) -> Duration {
        match operation {
            Operation::GetAll => self.get_all,
            Operation::GetById => self.get_by_id,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

impl From<&LatencyConfig> for StoreLatency {
    fn from(config: &LatencyConfig) -> Self {
        if !config.enabled {
            return Self::none();
        }
        Self {
            get_all: Duration::from_millis(config.get_all_ms),
            get_by_id: Duration::from_millis(config.get_by_id_ms),
            create: Duration::from_millis(config.create_ms),
            update: Duration::from_millis(config.update_ms),
            delete: Duration::from_millis(config.delete_ms),
        }
    }
}

/// In-memory collection of `E` implementing the repository ports
pub struct InMemoryStore<E: Entity> {
    items: RwLock<Vec<E>>,
    latency: StoreLatency,
    clock: Arc<dyn Clock>,
}

impl<E: Entity> InMemoryStore<E> {
    #[must_use]
    pub fn new(latency: StoreLatency) -> Self {
        Self::with_items(Vec::new(), latency)
    }

    /// Store pre-populated with `items`, kept in the given order.
    #[must_use]
    pub fn with_items(items: Vec<E>, latency: StoreLatency) -> Self {
        Self { items: RwLock::new(items), latency, clock: Arc::new(SystemClock) }
    }

    /// Clock used to stamp new entities.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Number of stored entities, without simulated latency.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Replace the whole collection, without simulated latency.
    pub async fn replace_all(&self, items: Vec<E>) {
        *self.items.write().await = items;
    }

    async fn simulate(&self, operation: Operation) {
        let delay = self.latency.delay(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn position<E: Entity>(items: &[E], id: &str) -> Result<usize> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| YearFlowError::not_found(E::KIND, id))
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryStore<E> {
    #[instrument(skip_all, fields(entity = E::KIND))]
    async fn get_all(&self) -> Result<Vec<E>> {
        self.simulate(Operation::GetAll).await;
        let items = self.items.read().await;
        debug!(count = items.len(), "Listed entities");
        Ok(items.clone())
    }

    #[instrument(skip_all, fields(entity = E::KIND, id = %id))]
    async fn get_by_id(&self, id: &str) -> Result<Option<E>> {
        self.simulate(Operation::GetById).await;
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    #[instrument(skip_all, fields(entity = E::KIND))]
    async fn create(&self, draft: E::Draft) -> Result<E> {
        self.simulate(Operation::Create).await;
        let entity = E::from_draft(Uuid::new_v4().to_string(), draft, self.clock.now());

        let mut items = self.items.write().await;
        items.push(entity);
        let touched = items.len() - 1;
        E::reconcile(&mut items, touched);
        let created = items[touched].clone();

        debug!(id = %created.id(), "Created entity");
        Ok(created)
    }

    #[instrument(skip_all, fields(entity = E::KIND, id = %id))]
    async fn update(&self, id: &str, patch: E::Patch) -> Result<E> {
        self.simulate(Operation::Update).await;
        let mut items = self.items.write().await;
        let index = position(&items, id)?;
        items[index].apply_patch(patch);
        E::reconcile(&mut items, index);
        Ok(items[index].clone())
    }

    #[instrument(skip_all, fields(entity = E::KIND, id = %id))]
    async fn delete(&self, id: &str) -> Result<bool> {
        self.simulate(Operation::Delete).await;
        let mut items = self.items.write().await;
        let index = position(&items, id)?;
        items.remove(index);
        debug!("Deleted entity");
        Ok(true)
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore<Notification> {
    /// Removes the goal's notifications in one write section, paying the
    /// delete latency once.
    #[instrument(skip(self))]
    async fn delete_by_goal(&self, goal_id: &str) -> Result<usize> {
        self.simulate(Operation::Delete).await;
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|n| !n.belongs_to(goal_id));
        let removed = before - items.len();
        debug!(removed, "Deleted goal notifications");
        Ok(removed)
    }
}

impl CalendarRepository for InMemoryStore<Calendar> {}
