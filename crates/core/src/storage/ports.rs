//! Port interfaces for entity storage
//!
//! These traits define the boundary between core business logic and the
//! data-access implementations. Every call is asynchronous and may suspend.

use async_trait::async_trait;
use yearflow_domain::{Calendar, Entity, Notification, Result};

/// Uniform CRUD contract shared by all four collections.
///
/// Returned entities are owned copies; mutating them never affects stored
/// state.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every stored entity, in insertion order.
    async fn get_all(&self) -> Result<Vec<E>>;

    /// Entity with `id`, or `None` when unknown.
    async fn get_by_id(&self, id: &str) -> Result<Option<E>>;

    /// Store a new entity; the store assigns its id.
    async fn create(&self, draft: E::Draft) -> Result<E>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// `YearFlowError::NotFound` when `id` is unknown.
    async fn update(&self, id: &str, patch: E::Patch) -> Result<E>;

    /// Remove an entity.
    ///
    /// # Errors
    /// `YearFlowError::NotFound` when `id` is unknown.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Notification store: the single source of truth for reminders.
///
/// A goal's notification list is the subset whose `goal_id` points at it.
#[async_trait]
pub trait NotificationRepository: Repository<Notification> {
    /// Notifications owned by `goal_id`, in insertion order.
    async fn find_by_goal(&self, goal_id: &str) -> Result<Vec<Notification>> {
        let all = self.get_all().await?;
        Ok(all.into_iter().filter(|n| n.belongs_to(goal_id)).collect())
    }

    /// Remove every notification owned by `goal_id`; returns how many went.
    async fn delete_by_goal(&self, goal_id: &str) -> Result<usize> {
        let owned = self.find_by_goal(goal_id).await?;
        for notification in &owned {
            self.delete(&notification.id).await?;
        }
        Ok(owned.len())
    }
}

/// Calendar store with lookup of the connected calendar.
#[async_trait]
pub trait CalendarRepository: Repository<Calendar> {
    /// The calendar currently marked connected, if any.
    async fn find_connected(&self) -> Result<Option<Calendar>> {
        let all = self.get_all().await?;
        Ok(all.into_iter().find(|c| c.connected))
    }
}
