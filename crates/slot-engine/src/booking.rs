//! Booking creation and meeting cancellation.
//!
//! Both operations are pure over their inputs plus one [`CalendarClient`]
//! call. Persisting the resulting [`Meeting`] (or removing it after a
//! cancellation) is the caller's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calendar::{CalendarClient, CalendarEventRequest};
use crate::error::{Result, SlotError};
use crate::model::{Booking, EventType, Host, Meeting};
use crate::overlap;

/// A guest's request to book one slot of an event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl BookingRequest {
    /// Check the fields a guest fills in.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidBooking` for an empty name, an email without
    /// `@`, or a time range that does not end after it starts.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SlotError::InvalidBooking("name is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(SlotError::InvalidBooking(format!(
                "invalid email address: {}",
                self.email
            )));
        }
        if self.start_time >= self.end_time {
            return Err(SlotError::InvalidBooking(
                "end time must be after start time".to_string(),
            ));
        }
        Ok(())
    }
}

/// Book a slot: validate, check for collisions, create the calendar event.
///
/// The calendar event is titled `"{guest} - {event title}"`, invites the guest
/// and the host, and requests a conference link keyed by
/// `"{event id}-{now in unix millis}"`.
///
/// # Errors
/// - `SlotError::InvalidBooking` if the request fails validation.
/// - `SlotError::EventNotFound` if the request targets another event type.
/// - `SlotError::SlotUnavailable` if an existing booking overlaps the range.
/// - `SlotError::Calendar` if the provider rejects the event.
pub fn create_booking(
    event: &EventType,
    host: &Host,
    request: &BookingRequest,
    existing: &[Booking],
    calendar: &dyn CalendarClient,
    now: DateTime<Utc>,
) -> Result<Meeting> {
    request.validate()?;

    if request.event_id != event.id {
        return Err(SlotError::EventNotFound(request.event_id.clone()));
    }

    let conflicts = overlap::overlapping_bookings(request.start_time, request.end_time, existing);
    if !conflicts.is_empty() {
        return Err(SlotError::SlotUnavailable {
            start: request.start_time,
            conflicts: conflicts.len(),
        });
    }

    let calendar_request = CalendarEventRequest {
        summary: format!("{} - {}", request.name, event.title),
        description: request.additional_info.clone(),
        start: request.start_time,
        end: request.end_time,
        attendees: vec![request.email.clone(), host.email.clone()],
        conference_request_id: format!("{}-{}", event.id, now.timestamp_millis()),
    };
    let created = calendar.create_event(&calendar_request)?;

    info!(
        event_id = %event.id,
        start = %request.start_time,
        has_meet_link = created.meet_link.is_some(),
        "booking created"
    );

    Ok(Meeting {
        event_id: event.id.clone(),
        host_id: host.id.clone(),
        guest_name: request.name.clone(),
        guest_email: request.email.clone(),
        start_time: request.start_time,
        end_time: request.end_time,
        additional_info: request.additional_info.clone(),
        meet_link: created.meet_link,
        calendar_event_id: created.id,
    })
}

/// Result of a cancellation. The meeting should be removed from storage in
/// every case; `warning` reports a calendar-side step that did not happen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOutcome {
    pub warning: Option<String>,
}

/// Cancel a meeting on behalf of `host_id`.
///
/// Deletes the provider event (notifying attendees) when the meeting has one.
/// Provider problems never fail the cancellation: they come back as a warning.
///
/// # Errors
/// Returns `SlotError::Unauthorized` if the meeting belongs to another host.
pub fn cancel_meeting(
    meeting: &Meeting,
    host_id: &str,
    calendar: Option<&dyn CalendarClient>,
) -> Result<CancelOutcome> {
    if meeting.host_id != host_id {
        return Err(SlotError::Unauthorized(format!(
            "meeting with {} at {}",
            meeting.guest_email, meeting.start_time
        )));
    }

    let Some(calendar_event_id) = meeting.calendar_event_id.as_deref() else {
        return Ok(CancelOutcome::default());
    };

    let Some(calendar) = calendar else {
        return Ok(CancelOutcome {
            warning: Some("host has not connected a calendar; skipped calendar deletion".into()),
        });
    };

    match calendar.delete_event(calendar_event_id, true) {
        Ok(()) => Ok(CancelOutcome::default()),
        Err(e) => {
            warn!(calendar_event_id, error = %e, "failed to delete calendar event");
            Ok(CancelOutcome {
                warning: Some(format!("calendar deletion failed: {e}")),
            })
        }
    }
}
