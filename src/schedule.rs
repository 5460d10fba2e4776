//! Weekday opening hours and wall-clock time values.
//!
//! DESIGN
//! ======
//! The schedule is a fixed table keyed by weekday. Dates arrive as the value
//! of an `<input type="date">` and are read as plain calendar dates, so the
//! weekday never depends on the visitor's timezone offset.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::fmt;
use std::str::FromStr;

use time::macros::{format_description, time};
use time::{Date, Time, Weekday};

use crate::error::ScriptError;

/// A wall-clock time of day as entered in `<input type="time">`.
///
/// Seconds are kept, so `20:00:30` orders after `20:00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Time);

impl TimeOfDay {
    /// Build a whole-minute time of day. Returns `None` outside `00:00..=23:59`.
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        match Time::from_hms(hour, minute, 0) {
            Ok(time) => Some(Self(time)),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.0.minute()
    }

    #[must_use]
    pub fn second(self) -> u8 {
        self.0.second()
    }

    /// Parse an `HH:MM` or `HH:MM:SS` value as produced by `<input type="time">`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTime` for anything else.
    pub fn parse(raw: &str) -> Result<Self, ScriptError> {
        Time::parse(raw.trim(), format_description!("[hour]:[minute][optional [:[second]]]"))
            .map(Self)
            .map_err(|_| ScriptError::InvalidTime(raw.to_owned()))
    }
}

impl FromStr for TimeOfDay {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `HH:MM`, or `HH:MM:SS` when the seconds are not zero.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.second() == 0 {
            self.0.format(format_description!("[hour]:[minute]"))
        } else {
            self.0.format(format_description!("[hour]:[minute]:[second]"))
        };
        f.write_str(&text.map_err(|_| fmt::Error)?)
    }
}

/// Opening and closing time for one day, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningHours {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl OpeningHours {
    #[must_use]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time <= self.close
    }

    /// Clamp `time` into the opening window.
    #[must_use]
    pub fn clamp(&self, time: TimeOfDay) -> TimeOfDay {
        if time < self.open {
            self.open
        } else if time > self.close {
            self.close
        } else {
            time
        }
    }
}

impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}

const WEEKDAY_HOURS: OpeningHours = OpeningHours { open: TimeOfDay(time!(10:00)), close: TimeOfDay(time!(22:00)) };
const WEEKEND_HOURS: OpeningHours = OpeningHours { open: TimeOfDay(time!(10:00)), close: TimeOfDay(time!(20:00)) };

/// Opening hours for `weekday`.
#[must_use]
pub fn hours_for(weekday: Weekday) -> OpeningHours {
    match weekday {
        Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday | Weekday::Thursday | Weekday::Friday => {
            WEEKDAY_HOURS
        }
        Weekday::Saturday | Weekday::Sunday => WEEKEND_HOURS,
    }
}

/// Opening hours by weekday index, `0` = Sunday through `6` = Saturday.
#[must_use]
pub fn hours_for_index(index: u8) -> Option<OpeningHours> {
    weekday_from_index(index).map(hours_for)
}

fn weekday_from_index(index: u8) -> Option<Weekday> {
    let weekday = match index {
        0 => Weekday::Sunday,
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        6 => Weekday::Saturday,
        _ => return None,
    };
    Some(weekday)
}

/// Weekday name in the accusative case, as used after "в".
#[must_use]
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "воскресенье",
        Weekday::Monday => "понедельник",
        Weekday::Tuesday => "вторник",
        Weekday::Wednesday => "среду",
        Weekday::Thursday => "четверг",
        Weekday::Friday => "пятницу",
        Weekday::Saturday => "субботу",
    }
}

/// Parse a `YYYY-MM-DD` date value.
///
/// # Errors
///
/// Returns `InvalidDate` when the value is not a real calendar date.
pub fn parse_date(raw: &str) -> Result<Date, ScriptError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ScriptError::InvalidDate(raw.to_owned()))
}

/// Format a date the way `<input type="date">` expects it.
///
/// # Errors
///
/// Returns `DateFormat` for a year the `YYYY` form cannot hold.
pub fn format_date(date: Date) -> Result<String, ScriptError> {
    Ok(date.format(format_description!("[year]-[month]-[day]"))?)
}
