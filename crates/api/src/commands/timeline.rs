//! Year timeline commands

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use yearflow_core::timeline::{month_detail, timeline_summary, MonthDetail, MonthMarker};
use yearflow_core::{Clock, Repository, TimelineMonth};
use yearflow_domain::Result;

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub year: i32,
    pub months: Vec<TimelineMonth>,
}

/// Month grid for `year`, or the current year when `None`.
pub async fn get_timeline(ctx: &AppContext, year: Option<i32>) -> Result<TimelineResponse> {
    execute_command("timeline::get_timeline", || async {
        let today = ctx.clock.today();
        let year = year.unwrap_or_else(|| today.year());
        let (goals, events) =
            tokio::try_join!(ctx.goal_repository.get_all(), ctx.event_repository.get_all())?;
        Ok(TimelineResponse { year, months: timeline_summary(year, &goals, &events, today) })
    })
    .await
}

/// Goals and events of one month.
pub async fn get_month_detail(ctx: &AppContext, marker: MonthMarker) -> Result<MonthDetail> {
    execute_command("timeline::get_month_detail", || async {
        let (goals, events) =
            tokio::try_join!(ctx.goal_repository.get_all(), ctx.event_repository.get_all())?;
        Ok(month_detail(marker, &goals, &events))
    })
    .await
}
