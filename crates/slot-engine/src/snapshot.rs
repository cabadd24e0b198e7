//! The caller's input contract: one host's data as fetched from storage.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::availability::{compute_availability, SlotRules};
use crate::error::{Result, SlotError};
use crate::model::{Availability, Booking, DaySlots, EventType};

/// A consistent snapshot of one event type, its host's availability, and all
/// of the host's bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    pub event: EventType,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl HostSnapshot {
    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidSnapshot` if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bookable slots for this snapshot's event type.
    pub fn available_slots<Z: TimeZone>(
        &self,
        now: &DateTime<Z>,
        rules: &SlotRules,
    ) -> Vec<DaySlots> {
        compute_availability(
            self.availability.as_ref(),
            &self.bookings,
            self.event.duration,
            now,
            rules,
        )
    }
}

/// Parse an IANA timezone name (e.g. `"America/New_York"`).
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
}
