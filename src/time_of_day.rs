//! Human time-of-day parsing.
//!
//! Schedules and filter windows carry times the way people type them
//! ("9:30 PM", "9 PM"). This module turns those strings into comparable
//! fractional hours.
//!
//! Two formats are accepted and tried in order:
//!
//! 1. [`TimeFormat::HourMinute`] (`h:mm a`), e.g. `"11:30 PM"`
//! 2. [`TimeFormat::Hour`] (`h a`), e.g. `"9 PM"`
//!
//! The first one that matches wins. [`TimeOfDay::parse`] reports failure as an
//! [`Error::InvalidTime`]; [`parse_time_to_hours`] is the lenient variant the
//! matcher uses by default, which logs and falls back to midnight.

use crate::error::{Error, Result};
use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static HOUR_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?P<hour>\d{1,2}):(?P<minute>\d{2})\s*(?P<meridiem>[ap]m)$").unwrap());

static HOUR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?P<hour>\d{1,2})\s*(?P<meridiem>[ap]m)$").unwrap());

/// Accepted input layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `h:mm a`, e.g. "9:30 PM".
    HourMinute,
    /// `h a`, e.g. "9 PM".
    Hour,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 2] = [TimeFormat::HourMinute, TimeFormat::Hour];

    /// Layout description in date-formatter notation.
    pub fn pattern(self) -> &'static str {
        match self {
            TimeFormat::HourMinute => "h:mm a",
            TimeFormat::Hour => "h a",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            TimeFormat::HourMinute => &*HOUR_MINUTE,
            TimeFormat::Hour => &*HOUR,
        }
    }

    fn parse(self, text: &str) -> Option<TimeOfDay> {
        let caps = self.regex().captures(text)?;
        let hour: u32 = caps.name("hour")?.as_str().parse().ok()?;
        let minute: u32 = match caps.name("minute") {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };

        let hour_24 = match caps.name("meridiem")?.as_str().to_ascii_lowercase().as_str() {
            "am" => match hour {
                12 => 0,
                1..=11 => hour,
                _ => return None,
            },
            "pm" => match hour {
                12 => 12,
                1..=11 => hour + 12,
                _ => return None,
            },
            _ => return None,
        };

        TimeOfDay::from_hm(hour_24, minute)
    }
}

/// A wall-clock time of day with minute precision.
///
/// No timezone is attached; values are local and compared as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(NaiveTime::MIN);

    /// Build from a 24-hour clock hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    /// Parse a human time string, trying each [`TimeFormat`] in order.
    ///
    /// ```
    /// use happy_hours::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("9:30 PM").unwrap();
    /// assert_eq!(t.hours(), 21.5);
    /// assert!(TimeOfDay::parse("half past nine").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        TimeFormat::ALL
            .iter()
            .find_map(|format| format.parse(trimmed))
            .ok_or_else(|| Error::InvalidTime { input: text.to_string() })
    }

    /// Fractional hour in `[0, 24)`.
    pub fn hours(self) -> f64 {
        f64::from(self.0.hour()) + f64::from(self.0.minute()) / 60.0
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minute() == 0 {
            write!(f, "{}", self.0.format("%-I %p"))
        } else {
            write!(f, "{}", self.0.format("%-I:%M %p"))
        }
    }
}

/// Lenient parse: fractional hour, or `0.0` when `text` is not a recognizable time.
///
/// Unparsable input is logged rather than reported, so malformed schedule data
/// degrades matching instead of aborting it. Use [`TimeOfDay::parse`] to tell
/// "midnight" apart from "garbage".
pub fn parse_time_to_hours(text: &str) -> f64 {
    match TimeOfDay::parse(text) {
        Ok(time) => time.hours(),
        Err(err) => {
            log::warn!("{err}; treating as midnight");
            0.0
        }
    }
}

/// Whole-hour labels offered by the time pickers: "12 AM", "1 AM", ... "11 PM".
pub fn hour_options() -> Vec<String> {
    (0..24).filter_map(|hour| TimeOfDay::from_hm(hour, 0)).map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_formats() {
        let cases: Vec<(f64, &str)> = vec![
            (21.5, "9:30 PM"),
            (21.0, "9 PM"),
            (21.0, "9:00 PM"),
            (9.0, "9:00 AM"),
            (23.5, "11:30 PM"),
            (0.0, "12 AM"),
            (0.5, "12:30 AM"),
            (12.0, "12 PM"),
            (12.25, "12:15 PM"),
            (17.0, "5pm"),
            (17.75, " 5:45 pm "),
        ];

        for (expected, input) in cases {
            assert_eq!(parse_time_to_hours(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn garbage_falls_back_to_midnight() {
        assert_eq!(parse_time_to_hours("garbage"), 0.0);
        assert_eq!(parse_time_to_hours(""), 0.0);
        assert_eq!(parse_time_to_hours("21:00"), 0.0);
    }

    #[test]
    fn strict_parse_rejects_out_of_range() {
        for input in ["13 PM", "0 AM", "9:60 PM", "9:5 PM", "noon", "9 30 PM"] {
            match TimeOfDay::parse(input) {
                Err(Error::InvalidTime { input: got }) => assert_eq!(got, input),
                other => panic!("{input:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn hour_minute_format_wins_over_hour_format() {
        assert_eq!(TimeFormat::ALL[0], TimeFormat::HourMinute);
        assert_eq!(TimeFormat::HourMinute.pattern(), "h:mm a");
        assert!(TimeFormat::Hour.parse("9:30 PM").is_none());
        assert_eq!("9:30 PM".parse::<TimeOfDay>().unwrap().minute(), 30);
    }

    #[test]
    fn display_round_trips_picker_labels() {
        assert_eq!(TimeOfDay::from_hm(21, 30).unwrap().to_string(), "9:30 PM");
        assert_eq!(TimeOfDay::from_hm(0, 0).unwrap().to_string(), "12 AM");
        assert_eq!(TimeOfDay::MIDNIGHT.hours(), 0.0);

        let options = hour_options();
        assert_eq!(options.len(), 24);
        assert_eq!(options.first().map(String::as_str), Some("12 AM"));
        assert_eq!(options[12], "12 PM");
        assert_eq!(options.last().map(String::as_str), Some("11 PM"));
        for (hour, label) in options.iter().enumerate() {
            assert_eq!(parse_time_to_hours(label), hour as f64);
        }
    }
}
