//! Per-day slot enumeration.
//!
//! Walks one day's availability window in back-to-back steps of the event
//! duration and keeps each step that no existing booking overlaps. A rejected
//! step still advances by the full duration; there is no finer-grained retry.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::dst::DstPolicy;
use crate::model::Booking;
use crate::overlap;

/// Format used for emitted slot start times.
pub const SLOT_FORMAT: &str = "%H:%M";

/// Enumerate bookable start times on `date` within `[window_start, window_end)`.
///
/// The zone of `now` is the server-local zone: window times are wall-clock
/// times in it, "today" is `now`'s local date, and slots are formatted in it.
///
/// When `date` is today and the window has already opened, enumeration starts
/// at `now + gap_minutes`. When the window has not opened yet it starts at the
/// window start and the gap is not applied.
///
/// Returns an empty list for a zero duration, an inverted or empty window, a
/// duration longer than the window, or a window that has already closed today.
/// A slot ending exactly at `window_end` is offered.
///
/// A candidate that would run past `window_end` is dropped, even though a
/// booking page that only checks start times would still show it. A 45-minute
/// event in a 09:00-10:00 window offers `["09:00"]` here, not
/// `["09:00", "09:45"]`; the 09:45 meeting would end outside the host's hours.
pub fn enumerate_slots<Tz: TimeZone>(
    window_start: NaiveTime,
    window_end: NaiveTime,
    duration_minutes: u32,
    bookings: &[Booking],
    date: NaiveDate,
    gap_minutes: u32,
    now: &DateTime<Tz>,
) -> Vec<String> {
    enumerate_slots_with_policy(
        window_start,
        window_end,
        duration_minutes,
        bookings,
        date,
        gap_minutes,
        now,
        DstPolicy::default(),
    )
}

/// Identical to [`enumerate_slots`] but with an explicit policy for window
/// boundaries that fall in a DST gap.
#[allow(clippy::too_many_arguments)]
pub fn enumerate_slots_with_policy<Tz: TimeZone>(
    window_start: NaiveTime,
    window_end: NaiveTime,
    duration_minutes: u32,
    bookings: &[Booking],
    date: NaiveDate,
    gap_minutes: u32,
    now: &DateTime<Tz>,
    dst_policy: DstPolicy,
) -> Vec<String> {
    if duration_minutes == 0 {
        debug!(%date, "zero event duration, no slots");
        return Vec::new();
    }

    let tz = now.timezone();
    let (Some(mut current), Some(close)) = (
        dst_policy.resolve(&tz, date.and_time(window_start)),
        dst_policy.resolve(&tz, date.and_time(window_end)),
    ) else {
        debug!(%date, ?dst_policy, "window boundary falls in a DST gap, no slots");
        return Vec::new();
    };

    if now.date_naive() == date && current < *now {
        current = now.clone() + Duration::minutes(i64::from(gap_minutes));
    }

    let duration = Duration::minutes(i64::from(duration_minutes));
    let mut slots = Vec::new();

    while current < close {
        let candidate_end = current.clone() + duration;
        if candidate_end > close {
            break;
        }

        let start_utc: DateTime<Utc> = current.with_timezone(&Utc);
        let end_utc: DateTime<Utc> = candidate_end.with_timezone(&Utc);
        if overlap::is_free(start_utc, end_utc, bookings) {
            slots.push(current.naive_local().format(SLOT_FORMAT).to_string());
        }

        current = candidate_end;
    }

    slots
}
