//! Tests for rolling-horizon availability aggregation.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::America::New_York;
use slot_engine::{
    compute_availability, Availability, Booking, DayOfWeek, DaySlots, DstPolicy, SlotRules,
    WeeklyWindow, DEFAULT_HORIZON_DAYS,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn window(day: DayOfWeek, start: (u32, u32), end: (u32, u32)) -> WeeklyWindow {
    WeeklyWindow {
        day,
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    }
}

fn availability(days: Vec<WeeklyWindow>, time_gap: u32) -> Availability {
    Availability { days, time_gap }
}

fn every_day(start: (u32, u32), end: (u32, u32)) -> Vec<WeeklyWindow> {
    [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ]
    .into_iter()
    .map(|day| window(day, start, end))
    .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn booking(start: &str, end: &str) -> Booking {
    Booking {
        start_time: start.parse().unwrap(),
        end_time: end.parse().unwrap(),
    }
}

/// Monday 2026-03-16 14:30 UTC.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 14, 30, 0).unwrap()
}

fn slots(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ── Configuration ───────────────────────────────────────────────────────────

#[test]
fn no_availability_configured_yields_empty() {
    let result = compute_availability(None, &[], 30, &now(), &SlotRules::default());
    assert!(result.is_empty());
}

#[test]
fn availability_without_windows_yields_empty() {
    let config = availability(vec![], 0);
    let result = compute_availability(Some(&config), &[], 30, &now(), &SlotRules::default());
    assert!(result.is_empty());
}

// ── Horizon ─────────────────────────────────────────────────────────────────

#[test]
fn horizon_covers_today_through_thirty_days_inclusive() {
    let config = availability(every_day((9, 0), (17, 0)), 0);
    let result = compute_availability(Some(&config), &[], 60, &now(), &SlotRules::default());

    assert_eq!(result.len(), 31);
    assert_eq!(result[0].date, date(2026, 3, 16));
    assert_eq!(result[30].date, date(2026, 4, 15));

    // Strictly increasing dates.
    for pair in result.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn custom_horizon_is_respected() {
    let config = availability(every_day((9, 0), (10, 0)), 0);
    let rules = SlotRules {
        horizon_days: 6,
        ..SlotRules::default()
    };
    let result = compute_availability(Some(&config), &[], 60, &now(), &rules);
    assert_eq!(result.len(), 7);
    assert_eq!(result[6].date, date(2026, 3, 22));
}

#[test]
fn zero_horizon_only_examines_today() {
    let config = availability(every_day((18, 0), (19, 0)), 0);
    let rules = SlotRules {
        horizon_days: 0,
        ..SlotRules::default()
    };
    let result = compute_availability(Some(&config), &[], 60, &now(), &rules);
    assert_eq!(
        result,
        vec![DaySlots {
            date: date(2026, 3, 16),
            slots: slots(&["18:00"]),
        }]
    );
}

// ── Weekday matching ────────────────────────────────────────────────────────

#[test]
fn days_without_window_are_omitted() {
    let config = availability(vec![window(DayOfWeek::Monday, (9, 0), (10, 0))], 0);
    let result = compute_availability(Some(&config), &[], 60, &now(), &SlotRules::default());

    let dates: Vec<NaiveDate> = result.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2026, 3, 16),
            date(2026, 3, 23),
            date(2026, 3, 30),
            date(2026, 4, 6),
            date(2026, 4, 13),
        ]
    );
}

#[test]
fn first_window_wins_for_duplicate_weekday() {
    let config = availability(
        vec![
            window(DayOfWeek::Tuesday, (9, 0), (11, 0)),
            window(DayOfWeek::Tuesday, (13, 0), (15, 0)),
        ],
        0,
    );
    let result = compute_availability(Some(&config), &[], 60, &now(), &SlotRules::default());
    assert_eq!(result[0].date, date(2026, 3, 17));
    assert_eq!(result[0].slots, slots(&["09:00", "10:00"]));
}

// ── Slot content ────────────────────────────────────────────────────────────

#[test]
fn today_is_truncated_and_later_days_are_full() {
    let config = availability(vec![window(DayOfWeek::Monday, (9, 0), (17, 0))], 15);
    let result = compute_availability(Some(&config), &[], 60, &now(), &SlotRules::default());

    assert_eq!(result[0].date, date(2026, 3, 16));
    assert_eq!(result[0].slots, slots(&["14:45", "15:45"]));

    assert_eq!(result[1].date, date(2026, 3, 23));
    assert_eq!(
        result[1].slots,
        slots(&["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"])
    );
}

#[test]
fn fully_booked_day_is_kept_with_no_slots() {
    let config = availability(vec![window(DayOfWeek::Tuesday, (9, 0), (12, 0))], 0);
    let bookings = vec![booking("2026-03-17T08:00:00Z", "2026-03-17T13:00:00Z")];
    let result = compute_availability(
        Some(&config),
        &bookings,
        60,
        &now(),
        &SlotRules::default(),
    );

    assert_eq!(result[0].date, date(2026, 3, 17));
    assert!(result[0].slots.is_empty());
    assert_eq!(result[1].date, date(2026, 3, 24));
    assert_eq!(result[1].slots, slots(&["09:00", "10:00", "11:00"]));
}

#[test]
fn bookings_only_affect_their_own_day() {
    let config = availability(vec![window(DayOfWeek::Wednesday, (9, 0), (12, 0))], 0);
    let bookings = vec![booking("2026-03-25T10:00:00Z", "2026-03-25T11:00:00Z")];
    let result = compute_availability(
        Some(&config),
        &bookings,
        60,
        &now(),
        &SlotRules::default(),
    );

    assert_eq!(result[0].date, date(2026, 3, 18));
    assert_eq!(result[0].slots, slots(&["09:00", "10:00", "11:00"]));
    assert_eq!(result[1].date, date(2026, 3, 25));
    assert_eq!(result[1].slots, slots(&["09:00", "11:00"]));
}

#[test]
fn zero_duration_keeps_days_but_offers_nothing() {
    let config = availability(vec![window(DayOfWeek::Friday, (9, 0), (12, 0))], 0);
    let result = compute_availability(Some(&config), &[], 0, &now(), &SlotRules::default());
    assert!(!result.is_empty());
    assert!(result.iter().all(|d| d.slots.is_empty()));
}

// ── Server-local zone ───────────────────────────────────────────────────────

#[test]
fn today_is_the_local_date_of_now() {
    // 02:00Z Monday is 22:00 Sunday in New York.
    let now = Utc
        .with_ymd_and_hms(2026, 3, 16, 2, 0, 0)
        .unwrap()
        .with_timezone(&New_York);
    let config = availability(vec![window(DayOfWeek::Sunday, (9, 0), (23, 0))], 0);
    let result = compute_availability(Some(&config), &[], 60, &now, &SlotRules::default());

    assert_eq!(result[0].date, date(2026, 3, 15));
    assert_eq!(result[0].slots, slots(&["22:00"]));
    assert_eq!(result[1].date, date(2026, 3, 22));
}

#[test]
fn serialized_output_matches_presentation_contract() {
    let config = availability(vec![window(DayOfWeek::Tuesday, (9, 0), (10, 0))], 0);
    let rules = SlotRules {
        horizon_days: 1,
        ..SlotRules::default()
    };
    let result = compute_availability(Some(&config), &[], 30, &now(), &rules);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"[{"date":"2026-03-17","slots":["09:00","09:30"]}]"#);
}

#[test]
fn default_rules_cover_thirty_days_and_shift_dst_gaps() {
    let rules = SlotRules::default();
    assert_eq!(rules.horizon_days, DEFAULT_HORIZON_DAYS);
    assert_eq!(rules.horizon_days, 30);
    assert_eq!(rules.dst_policy, DstPolicy::ShiftForward);
}
