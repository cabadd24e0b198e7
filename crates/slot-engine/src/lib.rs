//! # slot-engine
//!
//! Bookable time-slot generation for the Schedulrr booking service.
//!
//! Intersects a host's weekly availability windows with their existing
//! bookings and produces, for each of the next 30 days, the start times a
//! guest can book. Everything is a pure function of its inputs: "now" and the
//! server-local zone are passed in, and external calendar providers sit
//! behind the [`CalendarClient`] trait.
//!
//! ## Modules
//!
//! - [`overlap`] — Interval overlap between a candidate slot and bookings
//! - [`slots`] — Per-day slot enumeration
//! - [`availability`] — Day-range aggregation over the rolling horizon
//! - [`dst`] — DST gap policies for window boundaries
//! - [`events`] — Event type validation, ownership, and public listing
//! - [`booking`] — Booking creation and meeting cancellation
//! - [`meetings`] — Upcoming / past meeting selection
//! - [`calendar`] — Calendar provider capability trait
//! - [`username`] — Username slugs
//! - [`snapshot`] — Host snapshot input contract
//! - [`model`] — Domain types
//! - [`error`] — Error types

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod dst;
pub mod error;
pub mod events;
pub mod meetings;
pub mod model;
pub mod overlap;
pub mod slots;
pub mod snapshot;
pub mod username;

pub use availability::{compute_availability, SlotRules, DEFAULT_HORIZON_DAYS};
pub use booking::{cancel_meeting, create_booking, BookingRequest, CancelOutcome};
pub use calendar::{CalendarClient, CalendarEventRequest, CreatedCalendarEvent};
pub use dst::DstPolicy;
pub use error::{CalendarError, SlotError};
pub use events::{delete_event, public_event_types, validate_event_type};
pub use meetings::{select_meetings, MeetingFilter};
pub use model::{
    Availability, Booking, DayOfWeek, DaySlots, EventType, Host, Meeting, WeeklyWindow,
};
pub use overlap::{is_free, overlapping_bookings, overlaps};
pub use slots::{enumerate_slots, enumerate_slots_with_policy};
pub use snapshot::{parse_timezone, HostSnapshot};
pub use username::{to_slug, validate_username};
