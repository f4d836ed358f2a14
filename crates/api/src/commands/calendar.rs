//! Calendar connection commands

use yearflow_core::ConnectCalendarRequest;
use yearflow_domain::{Calendar, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Connect a calendar. Waits out the configured handshake delay.
pub async fn connect_calendar(ctx: &AppContext, request: &ConnectCalendarRequest) -> Result<Calendar> {
    execute_command("calendar::connect_calendar", || ctx.calendars.connect(request)).await
}

pub async fn disconnect_calendar(ctx: &AppContext, id: &str) -> Result<Calendar> {
    execute_command("calendar::disconnect_calendar", || ctx.calendars.disconnect(id)).await
}

pub async fn get_connected_calendar(ctx: &AppContext) -> Result<Option<Calendar>> {
    execute_command("calendar::get_connected_calendar", || ctx.calendars.connected_calendar()).await
}

pub async fn list_calendars(ctx: &AppContext) -> Result<Vec<Calendar>> {
    execute_command("calendar::list_calendars", || ctx.calendars.list_calendars()).await
}
