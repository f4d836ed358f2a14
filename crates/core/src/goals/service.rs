//! Goal service - create, edit, progress and delete goals

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use yearflow_domain::{
    Goal, GoalDraft, GoalPatch, Notification, NotificationPatch, NotificationTiming, ProgressStep,
    Result, YearFlowError,
};

use crate::clock::Clock;
use crate::storage::ports::{NotificationRepository, Repository};
use crate::validation::{validate_goal_draft, validate_notification_draft};

/// A goal together with the notifications that point at it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithNotifications {
    pub goal: Goal,
    pub notifications: Vec<Notification>,
}

/// Goal use cases over the goal and notification stores
pub struct GoalService {
    goals: Arc<dyn Repository<Goal>>,
    notifications: Arc<dyn NotificationRepository>,
    clock: Arc<dyn Clock>,
}

impl GoalService {
    #[must_use]
    pub fn new(
        goals: Arc<dyn Repository<Goal>>,
        notifications: Arc<dyn NotificationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { goals, notifications, clock }
    }

    /// Every goal, in store order.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn list_goals(&self) -> Result<Vec<Goal>> {
        self.goals.get_all().await
    }

    /// Goal `id` with its notifications, or `None` when unknown.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn get_goal_with_notifications(
        &self,
        id: &str,
    ) -> Result<Option<GoalWithNotifications>> {
        let Some(goal) = self.goals.get_by_id(id).await? else {
            return Ok(None);
        };
        let notifications = self.notifications.find_by_goal(id).await?;
        Ok(Some(GoalWithNotifications { goal, notifications }))
    }

    /// Notifications pointing at `goal_id`.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn goal_notifications(&self, goal_id: &str) -> Result<Vec<Notification>> {
        self.notifications.find_by_goal(goal_id).await
    }

    /// Validate and store a new goal, then its notifications.
    ///
    /// # Errors
    /// `YearFlowError::Validation` with goal field errors and notification
    /// errors keyed `notifications.<index>.<field>`. Nothing is stored.
    pub async fn create_goal(&self, draft: &GoalDraft) -> Result<GoalWithNotifications> {
        self.validate(draft)?;
        let new_goal = draft
            .to_new_goal()
            .ok_or_else(|| YearFlowError::InvalidInput("target date is not a valid date".into()))?;

        let goal = self.goals.create(new_goal).await?;
        let mut notifications = Vec::with_capacity(draft.notifications.len());
        for row in &draft.notifications {
            let new = row.to_new_notification(Some(goal.id.clone()), goal.target_day());
            notifications.push(self.notifications.create(new).await?);
        }

        info!(goal_id = %goal.id, notifications = notifications.len(), "Goal created");
        Ok(GoalWithNotifications { goal, notifications })
    }

    /// Replace the editable fields of goal `id` with the form contents.
    ///
    /// Existing notifications follow the new target date; notification rows
    /// in the form are added as new notifications.
    ///
    /// Notification writes run before the goal is committed, so a failed
    /// notification write leaves the goal untouched. Notification writes
    /// that already succeeded are not rolled back.
    ///
    /// # Errors
    /// `YearFlowError::NotFound` when `id` is unknown, checked before any
    /// write.
    pub async fn update_goal(&self, id: &str, draft: &GoalDraft) -> Result<GoalWithNotifications> {
        self.validate(draft)?;
        let new_goal = draft
            .to_new_goal()
            .ok_or_else(|| YearFlowError::InvalidInput("target date is not a valid date".into()))?;

        if self.goals.get_by_id(id).await?.is_none() {
            return Err(YearFlowError::not_found("goal", id));
        }
        let target_day = new_goal.target_date.date_naive();

        let mut notifications = Vec::new();
        for existing in self.notifications.find_by_goal(id).await? {
            if existing.timing.date == target_day {
                notifications.push(existing);
                continue;
            }
            let patch = NotificationPatch {
                timing: Some(NotificationTiming { date: target_day, ..existing.timing }),
                ..NotificationPatch::default()
            };
            notifications.push(self.notifications.update(&existing.id, patch).await?);
        }
        for row in &draft.notifications {
            let new = row.to_new_notification(Some(id.to_string()), target_day);
            notifications.push(self.notifications.create(new).await?);
        }

        let goal = self.goals.update(id, GoalPatch::from(new_goal)).await?;
        info!(goal_id = %goal.id, notifications = notifications.len(), "Goal updated");
        Ok(GoalWithNotifications { goal, notifications })
    }

    /// Delete goal `id` and every notification that points at it.
    ///
    /// # Errors
    /// `YearFlowError::NotFound` when `id` is unknown; nothing is removed.
    pub async fn delete_goal(&self, id: &str) -> Result<bool> {
        let deleted = self.goals.delete(id).await?;
        let removed = self.notifications.delete_by_goal(id).await?;
        info!(goal_id = %id, notifications_removed = removed, "Goal deleted");
        Ok(deleted)
    }

    /// Move progress one step (±10), clamped to `0..=100`.
    ///
    /// # Errors
    /// `YearFlowError::NotFound` when `id` is unknown.
    pub async fn step_progress(&self, id: &str, step: ProgressStep) -> Result<Goal> {
        let goal = self
            .goals
            .get_by_id(id)
            .await?
            .ok_or_else(|| YearFlowError::not_found("goal", id))?;
        let next = goal.stepped_progress(step);
        debug!(goal_id = %id, from = goal.progress, to = next, "Stepping progress");
        self.goals.update(id, GoalPatch::progress(i32::from(next))).await
    }

    /// Set progress directly. Out-of-range values are clamped, not refused.
    ///
    /// # Errors
    /// `YearFlowError::NotFound` when `id` is unknown.
    pub async fn set_progress(&self, id: &str, progress: i32) -> Result<Goal> {
        self.goals.update(id, GoalPatch::progress(progress)).await
    }

    fn validate(&self, draft: &GoalDraft) -> Result<()> {
        let mut errors = validate_goal_draft(draft, self.clock.today());
        for (index, row) in draft.notifications.iter().enumerate() {
            for (field, error) in validate_notification_draft(row).iter() {
                errors.insert(
                    format!("notifications.{index}.{field}"),
                    error.issue,
                    error.message.clone(),
                );
            }
        }
        if !errors.is_empty() {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Goal draft rejected");
        }
        errors.into_result()
    }
}
