//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for all core repository ports, enabling
//! deterministic tests without latency or seed files.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use yearflow_core::storage::ports::{CalendarRepository, NotificationRepository, Repository};
use yearflow_domain::{Calendar, Entity, Notification, Result as DomainResult, YearFlowError};

/// In-memory mock for `Repository<E>`.
///
/// Ids are `"<kind>-<n>"` with a per-mock counter. Clones share state.
#[derive(Clone)]
pub struct MockRepository<E: Entity> {
    items: Arc<Mutex<Vec<E>>>,
    next_id: Arc<AtomicUsize>,
}

impl<E: Entity> Default for MockRepository<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E: Entity> MockRepository<E> {
    /// Create a new mock seeded with the provided items.
    pub fn new(items: Vec<E>) -> Self {
        Self { items: Arc::new(Mutex::new(items)), next_id: Arc::new(AtomicUsize::new(1)) }
    }

    /// Current contents, bypassing the async API.
    pub fn snapshot(&self) -> Vec<E> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MockRepository<E> {
    async fn get_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.snapshot())
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Option<E>> {
        Ok(self.items.lock().unwrap().iter().find(|item| item.id() == id).cloned())
    }

    async fn create(&self, draft: E::Draft) -> DomainResult<E> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let entity = E::from_draft(format!("{}-{n}", E::KIND), draft, now);
        let mut items = self.items.lock().unwrap();
        items.push(entity.clone());
        let touched = items.len() - 1;
        E::reconcile(&mut items, touched);
        Ok(entity)
    }

    async fn update(&self, id: &str, patch: E::Patch) -> DomainResult<E> {
        let mut items = self.items.lock().unwrap();
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| YearFlowError::not_found(E::KIND, id))?;
        items[index].apply_patch(patch);
        E::reconcile(&mut items, index);
        Ok(items[index].clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let mut items = self.items.lock().unwrap();
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| YearFlowError::not_found(E::KIND, id))?;
        items.remove(index);
        Ok(true)
    }
}

impl NotificationRepository for MockRepository<Notification> {}

impl CalendarRepository for MockRepository<Calendar> {}

/// Repository whose every call fails with a storage error.
#[derive(Default, Clone)]
pub struct FailingRepository;

fn unavailable<T>() -> DomainResult<T> {
    Err(YearFlowError::Storage("store unavailable".into()))
}

#[async_trait]
impl<E: Entity> Repository<E> for FailingRepository {
    async fn get_all(&self) -> DomainResult<Vec<E>> {
        unavailable()
    }

    async fn get_by_id(&self, _id: &str) -> DomainResult<Option<E>> {
        unavailable()
    }

    async fn create(&self, _draft: E::Draft) -> DomainResult<E> {
        unavailable()
    }

    async fn update(&self, _id: &str, _patch: E::Patch) -> DomainResult<E> {
        unavailable()
    }

    async fn delete(&self, _id: &str) -> DomainResult<bool> {
        unavailable()
    }
}

impl NotificationRepository for FailingRepository {}

/// Wraps a mock: reads pass through, every write fails with a storage error.
#[derive(Clone)]
pub struct ReadOnlyRepository<E: Entity> {
    inner: MockRepository<E>,
}

impl<E: Entity> ReadOnlyRepository<E> {
    pub fn new(inner: MockRepository<E>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for ReadOnlyRepository<E> {
    async fn get_all(&self) -> DomainResult<Vec<E>> {
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Option<E>> {
        self.inner.get_by_id(id).await
    }

    async fn create(&self, _draft: E::Draft) -> DomainResult<E> {
        unavailable()
    }

    async fn update(&self, _id: &str, _patch: E::Patch) -> DomainResult<E> {
        unavailable()
    }

    async fn delete(&self, _id: &str) -> DomainResult<bool> {
        unavailable()
    }
}

impl NotificationRepository for ReadOnlyRepository<Notification> {}
