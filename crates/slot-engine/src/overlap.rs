//! Interval overlap between a candidate slot and existing bookings.
//!
//! A candidate collides with a booking when it starts inside the booking, ends
//! inside it, or fully contains it. Back-to-back ranges (one ends exactly when
//! the other starts) do NOT collide.

use chrono::{DateTime, Utc};

use crate::model::Booking;

/// Whether `[candidate_start, candidate_end)` collides with
/// `[booking_start, booking_end)`.
///
/// True when any of:
/// - `booking_start <= candidate_start < booking_end`
/// - `booking_start < candidate_end <= booking_end`
/// - `candidate_start <= booking_start && candidate_end >= booking_end`
pub fn overlaps(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    booking_start: DateTime<Utc>,
    booking_end: DateTime<Utc>,
) -> bool {
    let starts_inside = candidate_start >= booking_start && candidate_start < booking_end;
    let ends_inside = candidate_end > booking_start && candidate_end <= booking_end;
    let contains = candidate_start <= booking_start && candidate_end >= booking_end;

    starts_inside || ends_inside || contains
}

/// True when no booking in the list overlaps the candidate range.
///
/// The whole list is scanned; bookings on other dates simply never match.
pub fn is_free(start: DateTime<Utc>, end: DateTime<Utc>, bookings: &[Booking]) -> bool {
    !bookings
        .iter()
        .any(|b| overlaps(start, end, b.start_time, b.end_time))
}

/// All bookings that overlap the candidate range, in input order.
pub fn overlapping_bookings<'a>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    bookings: &'a [Booking],
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| overlaps(start, end, b.start_time, b.end_time))
        .collect()
}
