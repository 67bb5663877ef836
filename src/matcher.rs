//! Availability matching of schedule entries against filter criteria.
//!
//! An entry qualifies when both tests pass:
//!
//! - **day**: the criteria select no days, or select the entry's day;
//! - **time**: the query window is the full-day sentinel, or it overlaps the
//!   entry's window (`query.start < entry.end && query.end > entry.start`).
//!
//! A venue qualifies when at least one of its entries does.
//!
//! [`Matcher`] parses the query window once so a whole catalog can be checked
//! without re-parsing the criteria per entry. [`matches`] is the one-shot form.
//!
//! ## Full-day sentinel
//!
//! A query whose start falls in hour 0 and whose end falls in hour 23 is read
//! as "any time". Only whole hours are compared, so the default
//! `12:00 AM`–`11:30 PM` window (0.0 to 23.5) is unrestricted even though plain
//! overlap math would reject entries ending after 11:30 PM.

use crate::criteria::{FilterCriteria, UnparsableTime};
use crate::days::DaySet;
use crate::time_of_day::{TimeOfDay, parse_time_to_hours};
use crate::venue::{ScheduleEntry, Venue};
use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq)]
enum QueryWindow {
    Unrestricted,
    Between { start: f64, end: f64 },
    /// A query time failed to parse under [`UnparsableTime::Reject`].
    Unmatchable,
}

/// Criteria prepared for repeated matching.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    days: DaySet,
    window: QueryWindow,
    policy: UnparsableTime,
}

impl Matcher {
    pub fn new(criteria: &FilterCriteria) -> Self {
        let policy = criteria.unparsable;
        let window = match (hours(&criteria.start_time, policy), hours(&criteria.end_time, policy)) {
            (Some(start), Some(end)) if is_full_day(start, end) => QueryWindow::Unrestricted,
            (Some(start), Some(end)) => QueryWindow::Between { start, end },
            _ => QueryWindow::Unmatchable,
        };

        Self { days: criteria.selected_days, window, policy }
    }

    /// True when the criteria place no restriction on time of day.
    pub fn is_unrestricted(&self) -> bool {
        self.window == QueryWindow::Unrestricted
    }

    pub fn day_matches(&self, day: Weekday) -> bool {
        self.days.is_empty() || self.days.contains_day(day)
    }

    pub fn time_matches(&self, entry: &ScheduleEntry) -> bool {
        let (start, end) = match self.window {
            QueryWindow::Unrestricted => return true,
            QueryWindow::Unmatchable => return false,
            QueryWindow::Between { start, end } => (start, end),
        };

        match (hours(&entry.start_time, self.policy), hours(&entry.end_time, self.policy)) {
            (Some(entry_start), Some(entry_end)) => start < entry_end && end > entry_start,
            _ => false,
        }
    }

    /// Day test and time test for one entry.
    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        let matched = self.day_matches(entry.day) && self.time_matches(entry);
        log::trace!("entry {:?} {}-{} matched={}", entry.day, entry.start_time, entry.end_time, matched);
        matched
    }

    /// True if any entry of `venue` matches.
    pub fn venue_qualifies(&self, venue: &Venue) -> bool {
        venue.schedule.iter().any(|entry| self.matches(entry))
    }
}

/// One-shot form of [`Matcher::matches`].
///
/// ```
/// use happy_hours::{FilterCriteria, ScheduleEntry, matches};
/// use chrono::Weekday;
///
/// let entry = ScheduleEntry::new(Weekday::Mon, "4 PM", "6 PM");
/// let criteria = FilterCriteria::default().with_window("5 PM", "7 PM");
/// assert!(matches(&entry, &criteria));
/// ```
pub fn matches(entry: &ScheduleEntry, criteria: &FilterCriteria) -> bool {
    Matcher::new(criteria).matches(entry)
}

fn is_full_day(start: f64, end: f64) -> bool {
    start.floor() == 0.0 && end.floor() == 23.0
}

fn hours(text: &str, policy: UnparsableTime) -> Option<f64> {
    match policy {
        UnparsableTime::Midnight => Some(parse_time_to_hours(text)),
        UnparsableTime::Reject => match TimeOfDay::parse(text) {
            Ok(time) => Some(time.hours()),
            Err(err) => {
                log::warn!("{err}; not matching");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::WEEK;

    fn entry(day: Weekday, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry::new(day, start, end)
    }

    #[test]
    fn overlap_is_boundary_exclusive() {
        let criteria = FilterCriteria::default().with_window("5 PM", "7 PM");
        assert!(matches(&entry(Weekday::Mon, "4 PM", "6 PM"), &criteria));
        assert!(matches(&entry(Weekday::Mon, "6:30 PM", "9 PM"), &criteria));
        assert!(matches(&entry(Weekday::Mon, "3 PM", "11 PM"), &criteria));
        assert!(!matches(&entry(Weekday::Mon, "7 PM", "9 PM"), &criteria));
        assert!(!matches(&entry(Weekday::Mon, "3 PM", "5 PM"), &criteria));
    }

    #[test]
    fn default_window_is_unrestricted() {
        let criteria = FilterCriteria::default();
        let matcher = Matcher::new(&criteria);
        assert!(matcher.is_unrestricted());
        assert!(matcher.matches(&entry(Weekday::Sun, "11:30 PM", "11:45 PM")));
        assert!(matcher.matches(&entry(Weekday::Sun, "9 PM", "7 PM")));
        assert!(matcher.matches(&entry(Weekday::Sun, "whenever", "late")));
    }

    #[test]
    fn sentinel_compares_whole_hours() {
        assert!(Matcher::new(&FilterCriteria::default().with_window("12 AM", "11 PM")).is_unrestricted());
        assert!(Matcher::new(&FilterCriteria::default().with_window("12:30 AM", "11:59 PM")).is_unrestricted());
        assert!(!Matcher::new(&FilterCriteria::default().with_window("1 AM", "11 PM")).is_unrestricted());
        assert!(!Matcher::new(&FilterCriteria::default().with_window("12 AM", "10 PM")).is_unrestricted());
    }

    #[test]
    fn empty_day_set_matches_every_day() {
        let matcher = Matcher::new(&FilterCriteria::default());
        for day in WEEK {
            assert!(matcher.day_matches(day));
        }
    }

    #[test]
    fn selected_days_restrict() {
        let criteria = FilterCriteria::default().with_days([Weekday::Mon, Weekday::Wed]);
        assert!(matches(&entry(Weekday::Wed, "5 PM", "7 PM"), &criteria));
        assert!(!matches(&entry(Weekday::Tue, "5 PM", "7 PM"), &criteria));
    }

    #[test]
    fn no_cross_midnight_wraparound() {
        let criteria = FilterCriteria::default().with_window("11 PM", "11:30 PM");
        // 10 PM to 2 AM reads as 22.0..2.0 and never overlaps.
        assert!(!matches(&entry(Weekday::Fri, "10 PM", "2 AM"), &criteria));
    }

    #[test]
    fn unparsable_entry_reads_as_midnight_by_default() {
        let criteria = FilterCriteria::default().with_window("12 AM", "2 AM");
        // "soon" -> 0.0, "1 AM" -> 1.0: overlaps 0..2.
        assert!(matches(&entry(Weekday::Fri, "soon", "1 AM"), &criteria));
    }

    #[test]
    fn reject_policy_drops_unparsable_entries() {
        let criteria = FilterCriteria::default().with_window("12 AM", "2 AM").with_unparsable(UnparsableTime::Reject);
        assert!(!matches(&entry(Weekday::Fri, "soon", "1 AM"), &criteria));
        assert!(matches(&entry(Weekday::Fri, "12:30 AM", "1 AM"), &criteria));
    }

    #[test]
    fn reject_policy_with_bad_query_matches_nothing() {
        let criteria = FilterCriteria::default().with_window("dusk", "8 PM").with_unparsable(UnparsableTime::Reject);
        let matcher = Matcher::new(&criteria);
        assert!(!matcher.is_unrestricted());
        assert!(!matcher.matches(&entry(Weekday::Fri, "5 PM", "7 PM")));
    }

    #[test]
    fn venue_qualifies_if_any_entry_does() {
        let mut venue = crate::tests::venue(1, "Any", 0.0, 0.0);
        venue.schedule = vec![entry(Weekday::Mon, "1 PM", "2 PM"), entry(Weekday::Thu, "5 PM", "7 PM")];

        let matcher = Matcher::new(&FilterCriteria::default().with_days([Weekday::Thu]).with_window("6 PM", "8 PM"));
        assert!(matcher.venue_qualifies(&venue));

        let matcher = Matcher::new(&FilterCriteria::default().with_days([Weekday::Mon]).with_window("6 PM", "8 PM"));
        assert!(!matcher.venue_qualifies(&venue));

        venue.schedule.clear();
        assert!(!Matcher::new(&FilterCriteria::default()).venue_qualifies(&venue));
    }
}
