//! Venue records and their recurring weekly schedules.
//!
//! Field names follow the catalog service's JSON verbatim so records decode
//! straight from a fetch response.

use crate::days::serde_weekday;
use crate::geo::Coordinate;
use crate::time_of_day::parse_time_to_hours;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One recurring weekly window on a single weekday.
///
/// Times are display strings ("4 PM", "6:30 PM"). An end earlier than the start
/// is not read as crossing midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(with = "serde_weekday")]
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub specials: String,
}

impl ScheduleEntry {
    pub fn new(day: Weekday, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self { day, start_time: start_time.into(), end_time: end_time.into(), specials: String::new() }
    }

    pub fn with_specials(mut self, specials: impl Into<String>) -> Self {
        self.specials = specials.into();
        self
    }
}

/// A catalog venue.
///
/// `id` is the only stable identity. Coordinates are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(rename = "restaurant_id")]
    pub id: i64,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: String,
    #[serde(rename = "cobalt_apps", alias = "schedule", alias = "happy_hours", default)]
    pub schedule: Vec<ScheduleEntry>,
}

impl Venue {
    /// `"{street}, {city}, {state} {zip}"`
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.street_address, self.city, self.state, self.zip_code)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate { latitude: self.latitude, longitude: self.longitude }
    }

    /// Distinct weekdays this venue has entries on, in schedule order.
    pub fn days(&self) -> Vec<Weekday> {
        let mut days = Vec::new();
        for entry in &self.schedule {
            if !days.contains(&entry.day) {
                days.push(entry.day);
            }
        }
        days
    }

    pub fn entries_on(&self, day: Weekday) -> impl Iterator<Item = &ScheduleEntry> {
        self.schedule.iter().filter(move |entry| entry.day == day)
    }

    /// True if a single entry covers the whole `start`..`end` window.
    ///
    /// Unlike the overlap test used for filtering, this requires containment:
    /// the entry must start at or before `start` and end at or after `end`.
    pub fn is_available_during(&self, start: &str, end: &str) -> bool {
        let start = parse_time_to_hours(start);
        let end = parse_time_to_hours(end);

        self.schedule.iter().any(|entry| {
            parse_time_to_hours(&entry.start_time) <= start && parse_time_to_hours(&entry.end_time) >= end
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue() -> Venue {
        Venue {
            id: 7,
            name: "The Copper Tap".to_string(),
            street_address: "12 Elm St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            latitude: 39.8,
            longitude: -89.65,
            description: String::new(),
            features: "Patio".to_string(),
            schedule: vec![
                ScheduleEntry::new(Weekday::Fri, "4 PM", "7 PM").with_specials("$5 drafts"),
                ScheduleEntry::new(Weekday::Mon, "3:30 PM", "6 PM"),
                ScheduleEntry::new(Weekday::Fri, "10 PM", "11:30 PM"),
            ],
        }
    }

    #[test]
    fn full_address_format() {
        assert_eq!(venue().full_address(), "12 Elm St, Springfield, IL 62701");
    }

    #[test]
    fn days_are_distinct_in_schedule_order() {
        assert_eq!(venue().days(), vec![Weekday::Fri, Weekday::Mon]);
        assert_eq!(venue().entries_on(Weekday::Fri).count(), 2);
        assert_eq!(venue().entries_on(Weekday::Sun).count(), 0);
    }

    #[test]
    fn availability_requires_containment() {
        let v = venue();
        assert!(v.is_available_during("5 PM", "6 PM"));
        assert!(v.is_available_during("4 PM", "7 PM"));
        assert!(v.is_available_during("10:30 PM", "11 PM"));
        // Overlaps the 4-7 entry but is not contained in it.
        assert!(!v.is_available_during("6 PM", "8 PM"));
    }

    #[test]
    fn decodes_wire_format() {
        let json = r#"{
            "restaurant_id": 3,
            "name": "Dockside",
            "street_address": "1 Pier Rd",
            "city": "Harbor",
            "state": "ME",
            "zip_code": "04000",
            "latitude": 43.66,
            "longitude": -70.25,
            "description": "Oysters",
            "features": "Waterfront",
            "cobalt_apps": [
                {"day": "Tuesday", "start_time": "4 PM", "end_time": "6 PM", "specials": "Buck-a-shuck"}
            ]
        }"#;

        let v: Venue = serde_json::from_str(json).unwrap();
        assert_eq!(v.id, 3);
        assert_eq!(v.schedule[0].day, Weekday::Tue);
        assert_eq!(v.schedule[0].specials, "Buck-a-shuck");

        let back = serde_json::to_value(&v).unwrap();
        assert_eq!(back["restaurant_id"], 3);
        assert_eq!(back["cobalt_apps"][0]["day"], "Tuesday");
    }

    #[test]
    fn rejects_unknown_day() {
        let json = r#"{"day": "Someday", "start_time": "4 PM", "end_time": "6 PM"}"#;
        let err = serde_json::from_str::<ScheduleEntry>(json).unwrap_err();
        assert!(err.to_string().contains("Someday"));
    }
}
