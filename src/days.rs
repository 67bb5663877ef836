//! Weekday names and day sets.

use crate::error::{Error, Result};
use chrono::Weekday;

bitflags::bitflags! {
    /// Set of weekdays selected by a filter.
    ///
    /// An empty set means "no day restriction", not "no days".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DaySet: u8 {
        const MONDAY    = 1 << 0;
        const TUESDAY   = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY  = 1 << 3;
        const FRIDAY    = 1 << 4;
        const SATURDAY  = 1 << 5;
        const SUNDAY    = 1 << 6;
    }
}

/// Monday through Sunday, the order days are listed in.
pub const WEEK: [Weekday; 7] =
    [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun];

impl DaySet {
    pub fn from_weekday(day: Weekday) -> Self {
        DaySet::from_bits_truncate(1 << day.num_days_from_monday())
    }

    pub fn contains_day(self, day: Weekday) -> bool {
        self.contains(DaySet::from_weekday(day))
    }

    pub fn insert_day(&mut self, day: Weekday) {
        self.insert(DaySet::from_weekday(day));
    }

    pub fn remove_day(&mut self, day: Weekday) {
        self.remove(DaySet::from_weekday(day));
    }

    /// Flip `day` in or out of the set, like a checkbox.
    pub fn toggle_day(&mut self, day: Weekday) {
        self.toggle(DaySet::from_weekday(day));
    }

    /// Selected days in Monday→Sunday order.
    pub fn days(self) -> impl Iterator<Item = Weekday> {
        WEEK.into_iter().filter(move |day| self.contains_day(*day))
    }
}

impl Default for DaySet {
    fn default() -> Self {
        DaySet::empty()
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(DaySet::empty(), |set, day| set | DaySet::from_weekday(day))
    }
}

/// Full English name, as used on the wire ("Monday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a weekday name, case-insensitive. Three-letter abbreviations are accepted too.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    name.trim().parse::<Weekday>().map_err(|_| Error::UnknownWeekday(name.to_string()))
}

/// Serde adapter writing weekdays as full names.
pub(crate) mod serde_weekday {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(deserializer)?;
        super::parse_weekday(&name).map_err(serde::de::Error::custom)
    }
}
