use super::*;

fn t(raw: &str) -> TimeOfDay {
    TimeOfDay::parse(raw).expect("valid time")
}

// =============================================================
// TimeOfDay
// =============================================================

#[test]
fn time_parses_hours_and_minutes() {
    let time = t("09:05");
    assert_eq!(time.hour(), 9);
    assert_eq!(time.minute(), 5);
}

#[test]
fn time_keeps_seconds() {
    let time = t("21:30:45");
    assert_eq!((time.hour(), time.minute(), time.second()), (21, 30, 45));
    assert!(time > t("21:30"));
    assert_eq!(t("21:30:00"), t("21:30"));
}

#[test]
fn time_trims_surrounding_whitespace() {
    assert_eq!(t(" 09:00 "), t("09:00"));
}

#[test]
fn time_rejects_out_of_range_and_garbage() {
    for raw in ["24:00", "12:60", "12", "", "ab:cd", "12:00:61", "12:00:00:00", "-1:00", "123:00", "9:00"] {
        assert!(TimeOfDay::parse(raw).is_err(), "{raw:?} should be rejected");
    }
}

#[test]
fn time_displays_zero_padded() {
    assert_eq!(t("07:03").to_string(), "07:03");
    assert_eq!(t("20:00:30").to_string(), "20:00:30");
    assert_eq!(TimeOfDay::new(0, 0).map(|v| v.to_string()).as_deref(), Some("00:00"));
}

#[test]
fn time_new_rejects_invalid_components() {
    assert!(TimeOfDay::new(24, 0).is_none());
    assert!(TimeOfDay::new(0, 60).is_none());
}

#[test]
fn time_ordering_follows_clock() {
    assert!(t("09:59") < t("10:00"));
    assert!(t("22:00") > t("21:59"));
}

// =============================================================
// Schedule
// =============================================================

#[test]
fn weekdays_open_ten_to_twenty_two() {
    for index in 1..=5 {
        let hours = hours_for_index(index).expect("weekday");
        assert_eq!(hours.to_string(), "10:00 - 22:00");
    }
}

#[test]
fn weekend_opens_ten_to_twenty() {
    for index in [0, 6] {
        let hours = hours_for_index(index).expect("weekend day");
        assert_eq!(hours.to_string(), "10:00 - 20:00");
    }
}

#[test]
fn index_outside_week_has_no_hours() {
    assert!(hours_for_index(7).is_none());
}

#[test]
fn opening_hours_bounds_are_inclusive() {
    let hours = hours_for(Weekday::Saturday);
    assert!(hours.contains(t("10:00")));
    assert!(hours.contains(t("20:00")));
    assert!(!hours.contains(t("09:59")));
    assert!(!hours.contains(t("20:01")));
    assert!(!hours.contains(t("20:00:01")));
}

#[test]
fn opening_hours_clamp() {
    let hours = hours_for(Weekday::Monday);
    assert_eq!(hours.clamp(t("08:00")), t("10:00"));
    assert_eq!(hours.clamp(t("23:15")), t("22:00"));
    assert_eq!(hours.clamp(t("22:00:30")), t("22:00"));
    assert_eq!(hours.clamp(t("12:30")), t("12:30"));
}

#[test]
fn day_names_are_accusative() {
    assert_eq!(day_name(Weekday::Monday), "понедельник");
    assert_eq!(day_name(Weekday::Wednesday), "среду");
    assert_eq!(day_name(Weekday::Saturday), "субботу");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn parse_date_reads_calendar_weekday() {
    // 2024-06-15 was a Saturday, 2024-06-17 a Monday.
    assert_eq!(parse_date("2024-06-15").expect("date").weekday(), Weekday::Saturday);
    assert_eq!(parse_date("2024-06-17").expect("date").weekday(), Weekday::Monday);
}

#[test]
fn parse_date_rejects_impossible_dates() {
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("15.06.2024").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn format_date_is_zero_padded_iso() {
    let date = parse_date("2024-03-07").expect("date");
    assert_eq!(format_date(date).expect("formatted").as_str(), "2024-03-07");
}
