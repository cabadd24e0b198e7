//! Rolling-horizon availability for a host.
//!
//! Walks every calendar date from today through today + horizon (inclusive),
//! matches each date against the host's weekly windows, and enumerates the
//! bookable slots of each matching date. This is what a public booking page
//! shows for one event type.

use chrono::{DateTime, Datelike, Days, TimeZone};
use tracing::debug;

use crate::dst::DstPolicy;
use crate::model::{Availability, Booking, DayOfWeek, DaySlots};
use crate::slots;

/// Number of days past today that availability is computed for.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Tunables for [`compute_availability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRules {
    /// Days past today to include. Today + `horizon_days` is the last date.
    pub horizon_days: u32,
    /// How window boundaries inside a DST gap are resolved.
    pub dst_policy: DstPolicy,
}

impl Default for SlotRules {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            dst_policy: DstPolicy::default(),
        }
    }
}

/// Compute bookable slots for every date in the horizon.
///
/// # Arguments
///
/// * `availability` — The host's weekly windows and gap buffer. `None` means the
///   host never configured availability and yields an empty result.
/// * `bookings` — Every existing booking of the host, on any date.
/// * `duration_minutes` — Length of the event being scheduled.
/// * `now` — Current instant in the server-local zone.
/// * `rules` — Horizon length and DST handling.
///
/// Dates whose weekday has no window are omitted. Dates with a window but no
/// free slot are kept with an empty slot list. When several windows share a
/// weekday the first one wins.
pub fn compute_availability<Tz: TimeZone>(
    availability: Option<&Availability>,
    bookings: &[Booking],
    duration_minutes: u32,
    now: &DateTime<Tz>,
    rules: &SlotRules,
) -> Vec<DaySlots> {
    let Some(availability) = availability else {
        debug!("host has no availability configured");
        return Vec::new();
    };

    let today = now.date_naive();
    let mut available_dates = Vec::new();

    for offset in 0..=u64::from(rules.horizon_days) {
        let Some(date) = today.checked_add_days(Days::new(offset)) else {
            break;
        };

        let day = DayOfWeek::from(date.weekday());
        let Some(window) = availability.window_for(day) else {
            continue;
        };

        let slots = slots::enumerate_slots_with_policy(
            window.start_time,
            window.end_time,
            duration_minutes,
            bookings,
            date,
            availability.time_gap,
            now,
            rules.dst_policy,
        );

        available_dates.push(DaySlots { date, slots });
    }

    debug!(
        days = available_dates.len(),
        horizon = rules.horizon_days,
        "computed availability"
    );
    available_dates
}
