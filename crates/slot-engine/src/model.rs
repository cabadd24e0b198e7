//! Domain types read by the slot generator and the booking flow.
//!
//! All instants are UTC. Times of day are wall-clock times in the host's
//! server-local zone and serialize as `"HH:MM"`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Day of the week a [`WeeklyWindow`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// A recurring bookable window on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyWindow {
    pub day: DayOfWeek,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
}

/// A host's availability configuration.
///
/// Weekdays without a window are fully unavailable. Duplicate windows for the
/// same weekday are not merged: the first one in `days` is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Availability {
    pub days: Vec<WeeklyWindow>,
    /// Minimum lead time in minutes before the earliest slot offered today.
    #[serde(default)]
    pub time_gap: u32,
}

impl Availability {
    /// The first window configured for `day`, if any.
    pub fn window_for(&self, day: DayOfWeek) -> Option<&WeeklyWindow> {
        self.days.iter().find(|w| w.day == day)
    }
}

/// An existing reservation occupying `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Bookable start times for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    /// Start times formatted `HH:MM`, strictly increasing.
    pub slots: Vec<String>,
}

/// A bookable event type published by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Length of each meeting in minutes.
    pub duration: u32,
    #[serde(default)]
    pub is_private: bool,
    /// Id of the host who owns this event type.
    #[serde(default)]
    pub host_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

/// A stored booking as seen by the host who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub event_id: String,
    pub host_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub meet_link: Option<String>,
    #[serde(default)]
    pub calendar_event_id: Option<String>,
}

impl Meeting {
    /// The time range this meeting occupies on the host's calendar.
    pub fn as_booking(&self) -> Booking {
        Booking {
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Serde adapter for `"HH:MM"` wall-clock times. Seconds are accepted on input.
pub(crate) mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid time of day {raw:?}: {e}")))
    }
}
