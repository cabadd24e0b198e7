//! Capability interface to an external calendar / conferencing provider.
//!
//! The slot core never touches a provider. Booking creation and meeting
//! cancellation receive a [`CalendarClient`] explicitly, already authorized
//! for the host, so tests can substitute an in-memory implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A calendar event to create on the host's primary calendar, with a
/// conference link requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEventRequest {
    pub summary: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub attendees: Vec<String>,
    /// Idempotency key for the conference link request.
    pub conference_request_id: String,
}

/// What the provider returned for a created event. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCalendarEvent {
    pub id: Option<String>,
    pub meet_link: Option<String>,
}

pub trait CalendarClient: Send + Sync {
    fn create_event(
        &self,
        request: &CalendarEventRequest,
    ) -> Result<CreatedCalendarEvent, CalendarError>;

    /// Delete an event. With `notify_attendees` the provider emails a
    /// cancellation to every attendee.
    fn delete_event(&self, calendar_event_id: &str, notify_attendees: bool)
        -> Result<(), CalendarError>;
}
