//! DST transition policies for window boundaries.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};

/// Policy for window boundaries that fall in a DST gap (e.g. 02:30 on the
/// spring-forward night). Ambiguous times (fall back) always take the earlier
/// instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DstPolicy {
    /// Move the nonexistent time one hour later.
    #[default]
    ShiftForward,
    /// Offer nothing for a window whose boundary does not exist.
    Skip,
}

impl DstPolicy {
    /// Resolve a wall-clock time in `tz` to a concrete instant.
    pub fn resolve<Tz: TimeZone>(self, tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Some(dt),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => match self {
                DstPolicy::Skip => None,
                DstPolicy::ShiftForward => tz
                    .from_local_datetime(&(local + Duration::hours(1)))
                    .earliest(),
            },
        }
    }
}
