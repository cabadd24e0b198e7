//! Error types for slot-engine operations.
//!
//! Slot generation itself never fails: degenerate input produces an empty
//! result. These errors cover the booking flow and input parsing around it.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid booking: {0}")]
    InvalidBooking(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Slot starting at {start} overlaps {conflicts} existing booking(s)")]
    SlotUnavailable {
        start: DateTime<Utc>,
        conflicts: usize,
    },

    #[error("Invalid event type: {0}")]
    InvalidEvent(String),

    /// The named resource does not exist or belongs to another host.
    #[error("{0} not found or not owned by this host")]
    Unauthorized(String),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid host snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    #[error("Calendar provider error: {0}")]
    Calendar(#[from] CalendarError),
}

/// Failures reported by a [`CalendarClient`](crate::calendar::CalendarClient).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    #[error("host has not connected a calendar")]
    NotConnected,

    #[error("{0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
