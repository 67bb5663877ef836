//! Filter criteria: the user's active query.
//!
//! Criteria are plain values passed into every matcher and filter call. There
//! is no shared filter state; screens that need the same query hold a copy.

use crate::days::DaySet;
use chrono::Weekday;

pub const DEFAULT_START_TIME: &str = "12:00 AM";
pub const DEFAULT_END_TIME: &str = "11:30 PM";

/// How the matcher treats a time string it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnparsableTime {
    /// Read it as midnight (`0.0`) after logging a warning.
    #[default]
    Midnight,
    /// Any comparison involving it fails, so the entry never qualifies.
    Reject,
}

/// The active query: day set, time window, name search and address search.
///
/// ```
/// use happy_hours::FilterCriteria;
/// use chrono::Weekday;
///
/// let criteria = FilterCriteria::default()
///     .with_days([Weekday::Fri, Weekday::Sat])
///     .with_window("4 PM", "8 PM")
///     .with_search("tap");
/// assert!(criteria.selected_days.contains_day(Weekday::Fri));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Empty means every day.
    pub selected_days: DaySet,
    pub start_time: String,
    pub end_time: String,
    /// Case-insensitive substring of the venue name; empty matches all.
    pub search_text: String,
    /// Case-insensitive substring of the full address; empty matches all.
    pub location_text: String,
    pub unparsable: UnparsableTime,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            selected_days: DaySet::empty(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            search_text: String::new(),
            location_text: String::new(),
            unparsable: UnparsableTime::default(),
        }
    }
}

impl FilterCriteria {
    pub fn with_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.selected_days = days.into_iter().collect();
        self
    }

    pub fn with_window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_location(mut self, text: impl Into<String>) -> Self {
        self.location_text = text.into();
        self
    }

    pub fn with_unparsable(mut self, policy: UnparsableTime) -> Self {
        self.unparsable = policy;
        self
    }

    /// Put every field back to its default, keeping the unparsable-time policy.
    pub fn reset(&mut self) {
        *self = FilterCriteria { unparsable: self.unparsable, ..FilterCriteria::default() };
    }
}
