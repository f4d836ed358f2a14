//! Goal commands

use serde::{Deserialize, Serialize};
use tracing::debug;
use yearflow_core::filtering::{available_categories, filter_goals, GoalStats};
use yearflow_core::GoalWithNotifications;
use yearflow_domain::{Goal, GoalCategory, GoalDraft, GoalFilter, ProgressStep, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Goal list as shown under the filter toolbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
    /// Counters over all goals, before filtering.
    pub stats: GoalStats,
    pub active_filter_count: usize,
    pub available_categories: Vec<GoalCategory>,
}

/// List goals matching `filter`, in store order.
pub async fn list_goals(ctx: &AppContext, filter: &GoalFilter) -> Result<GoalListResponse> {
    execute_command("goals::list_goals", || async {
        let all = ctx.goals.list_goals().await?;
        let goals: Vec<Goal> = filter_goals(&all, filter).into_iter().cloned().collect();
        debug!(total = all.len(), shown = goals.len(), "Goals filtered");
        Ok(GoalListResponse {
            stats: GoalStats::from_goals(&all),
            active_filter_count: filter.active_count(),
            available_categories: available_categories(&all),
            goals,
        })
    })
    .await
}

pub async fn get_goal(ctx: &AppContext, id: &str) -> Result<Option<GoalWithNotifications>> {
    execute_command("goals::get_goal", || ctx.goals.get_goal_with_notifications(id)).await
}

pub async fn create_goal(ctx: &AppContext, draft: &GoalDraft) -> Result<GoalWithNotifications> {
    execute_command("goals::create_goal", || ctx.goals.create_goal(draft)).await
}

pub async fn update_goal(
    ctx: &AppContext,
    id: &str,
    draft: &GoalDraft,
) -> Result<GoalWithNotifications> {
    execute_command("goals::update_goal", || ctx.goals.update_goal(id, draft)).await
}

pub async fn delete_goal(ctx: &AppContext, id: &str) -> Result<bool> {
    execute_command("goals::delete_goal", || ctx.goals.delete_goal(id)).await
}

pub async fn step_goal_progress(ctx: &AppContext, id: &str, step: ProgressStep) -> Result<Goal> {
    execute_command("goals::step_goal_progress", || ctx.goals.step_progress(id, step)).await
}

pub async fn set_goal_progress(ctx: &AppContext, id: &str, progress: i32) -> Result<Goal> {
    execute_command("goals::set_goal_progress", || ctx.goals.set_progress(id, progress)).await
}
