//! Notification panel commands

use yearflow_core::reminders::{reminder_digest, ScheduledReminder};
use yearflow_core::{Clock, Repository};
use yearflow_domain::{Notification, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Reminders due now, annotated for display. Recomputed on every call.
pub async fn get_active_reminders(ctx: &AppContext) -> Result<Vec<ScheduledReminder>> {
    execute_command("reminders::get_active_reminders", || async {
        let notifications = ctx.notification_repository.get_all().await?;
        Ok(reminder_digest(&notifications, ctx.clock.now()))
    })
    .await
}

/// Notifications attached to goal `goal_id`.
pub async fn get_goal_notifications(ctx: &AppContext, goal_id: &str) -> Result<Vec<Notification>> {
    execute_command("reminders::get_goal_notifications", || ctx.goals.goal_notifications(goal_id))
        .await
}
