//! Upcoming / past meeting lists for a host's dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Meeting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingFilter {
    /// Meetings starting at or after now, soonest first.
    #[default]
    Upcoming,
    /// Meetings that started before now, most recent first.
    Past,
}

pub fn select_meetings<'a>(
    meetings: &'a [Meeting],
    filter: MeetingFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Meeting> {
    let mut selected: Vec<&Meeting> = meetings
        .iter()
        .filter(|m| match filter {
            MeetingFilter::Upcoming => m.start_time >= now,
            MeetingFilter::Past => m.start_time < now,
        })
        .collect();

    match filter {
        MeetingFilter::Upcoming => selected.sort_by_key(|m| m.start_time),
        MeetingFilter::Past => selected.sort_by(|a, b| b.start_time.cmp(&a.start_time)),
    }

    selected
}
