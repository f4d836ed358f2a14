//! YearFlow - yearly goals planner
//!
//! Headless entry point: loads configuration, seeds the in-memory stores,
//! reads the planner snapshot and prints the overview as JSON.

use anyhow::Context;
use tracing::{info, warn};
use yearflow_lib::utils::logging::init_logging;
use yearflow_lib::{get_timeline, load_planner, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; logging is not up yet so remember the outcome
    let dotenv = dotenvy::dotenv();

    let config = yearflow_infra::config::load().context("failed to load configuration")?;
    init_logging(&config.logging);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => warn!(error = %err, "No .env file loaded"),
    }

    info!("YearFlow starting...");
    let ctx = AppContext::new_with_config(config).context("failed to build application context")?;

    let overview = load_planner(&ctx).await.context("failed to load planner data")?;
    info!(
        goals = overview.stats.total,
        active_goals = overview.stats.active,
        completed_goals = overview.stats.completed,
        events = overview.snapshot.events.len(),
        reminders = overview.reminders.len(),
        "Planner loaded"
    );

    let timeline = get_timeline(&ctx, None).await.context("failed to build timeline")?;
    let busy_months = timeline.months.iter().filter(|m| m.goal_count + m.event_count > 0).count();
    info!(year = timeline.year, busy_months, "Timeline ready");

    let output = serde_json::json!({ "overview": overview, "timeline": timeline });
    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
