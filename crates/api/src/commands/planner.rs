//! Planner startup command

use serde::{Deserialize, Serialize};
use yearflow_core::filtering::GoalStats;
use yearflow_core::{Clock, PlannerSnapshot, ScheduledReminder};
use yearflow_domain::Result;

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Everything the planner screen needs on first paint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerOverview {
    pub snapshot: PlannerSnapshot,
    pub stats: GoalStats,
    pub reminders: Vec<ScheduledReminder>,
}

/// Load goals, events and notifications in one concurrent batch.
///
/// Fails as a whole with `LoadFailure` when any read fails.
pub async fn load_planner(ctx: &AppContext) -> Result<PlannerOverview> {
    execute_command("planner::load_planner", || async {
        let snapshot = ctx.planner.load_snapshot().await?;
        let stats = snapshot.stats();
        let reminders = snapshot.reminders(ctx.clock.now());
        Ok(PlannerOverview { snapshot, stats, reminders })
    })
    .await
}
