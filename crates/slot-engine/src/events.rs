//! Event type management: validation before storing, ownership on delete,
//! and the list a host's public booking page shows.

use tracing::debug;

use crate::error::{Result, SlotError};
use crate::model::EventType;

/// Check an event type before it is stored.
///
/// # Errors
/// Returns `SlotError::InvalidEvent` for a blank title or a zero duration.
pub fn validate_event_type(event: &EventType) -> Result<()> {
    if event.title.trim().is_empty() {
        return Err(SlotError::InvalidEvent("title is required".to_string()));
    }
    if event.duration == 0 {
        return Err(SlotError::InvalidEvent(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}

/// Authorize `host_id` to delete `event`. Removing the stored row is the
/// caller's job once this returns `Ok`.
///
/// # Errors
/// Returns `SlotError::Unauthorized` if another host owns the event type.
pub fn delete_event(event: &EventType, host_id: &str) -> Result<()> {
    if event.host_id != host_id {
        return Err(SlotError::Unauthorized(format!("event {}", event.id)));
    }
    debug!(event_id = %event.id, "event type deletion authorized");
    Ok(())
}

/// Event types a guest may see on the host's public page: private ones are
/// hidden, newest first. Event types without a creation time sort last.
pub fn public_event_types(events: &[EventType]) -> Vec<&EventType> {
    let mut public: Vec<&EventType> = events.iter().filter(|e| !e.is_private).collect();
    public.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    public
}
