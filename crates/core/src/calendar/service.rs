//! Calendar service - connect, disconnect and query calendars
//!
//! No provider is contacted. Connecting validates the id, waits out a
//! simulated handshake and records the calendar as the connected one.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use yearflow_domain::{Calendar, CalendarKind, CalendarPatch, NewCalendar, Result};

use crate::clock::Clock;
use crate::storage::ports::{CalendarRepository, Repository};
use crate::validation::{calendar_display_name, validate_calendar_id};

/// Connect dialog input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectCalendarRequest {
    pub calendar_id: String,
    #[serde(rename = "type")]
    pub kind: CalendarKind,
}

pub struct CalendarService {
    calendars: Arc<dyn CalendarRepository>,
    clock: Arc<dyn Clock>,
    connect_delay: Duration,
}

impl CalendarService {
    #[must_use]
    pub fn new(calendars: Arc<dyn CalendarRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { calendars, clock, connect_delay: Duration::ZERO }
    }

    /// Simulated provider handshake applied before each connect.
    #[must_use]
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = delay;
        self
    }

    /// # Errors
    /// Propagates store failures.
    pub async fn list_calendars(&self) -> Result<Vec<Calendar>> {
        self.calendars.get_all().await
    }

    /// # Errors
    /// Propagates store failures.
    pub async fn connected_calendar(&self) -> Result<Option<Calendar>> {
        self.calendars.find_connected().await
    }

    /// Connect the calendar named in `request`; every other calendar is
    /// disconnected.
    ///
    /// # Errors
    /// `YearFlowError::Validation` keyed `calendarId` when the id is blank or
    /// malformed for its provider.
    pub async fn connect(&self, request: &ConnectCalendarRequest) -> Result<Calendar> {
        validate_calendar_id(&request.calendar_id, request.kind).into_result()?;

        let id = request.calendar_id.trim();
        let name = calendar_display_name(id, request.kind);

        if !self.connect_delay.is_zero() {
            tokio::time::sleep(self.connect_delay).await;
        }

        let calendar = match self.calendars.get_by_id(id).await? {
            Some(_) => {
                let patch = CalendarPatch {
                    name: Some(name),
                    connected: Some(true),
                    last_sync: Some(self.clock.now()),
                };
                self.calendars.update(id, patch).await?
            }
            None => {
                let draft = NewCalendar { id: id.to_string(), kind: request.kind, name };
                self.calendars.create(draft).await?
            }
        };

        info!(calendar_id = %calendar.id, kind = %calendar.kind, "Calendar connected");
        Ok(calendar)
    }

    /// Mark calendar `id` disconnected. It stays in the list.
    ///
    /// # Errors
    /// `YearFlowError::NotFound` when `id` is unknown.
    pub async fn disconnect(&self, id: &str) -> Result<Calendar> {
        let patch = CalendarPatch { connected: Some(false), ..CalendarPatch::default() };
        let calendar = self.calendars.update(id, patch).await.inspect_err(|err| {
            warn!(calendar_id = %id, error = %err, "Disconnect failed");
        })?;
        info!(calendar_id = %id, "Calendar disconnected");
        Ok(calendar)
    }
}
