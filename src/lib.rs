//! Availability matching for venues with recurring weekly time windows.
//!
//! Each [`Venue`] carries a schedule of [`ScheduleEntry`] windows ("Friday,
//! 4 PM to 7 PM"). Given a [`FilterCriteria`] (selected weekdays, a time
//! window, name and address search text) the crate decides which venues
//! qualify, and maps a tapped map coordinate back to the venue it came from.
//!
//! ```text
//! catalog JSON ── Catalog::from_json ──▶ Vec<Venue>
//!                                          │
//! FilterCriteria ── Matcher::new ──────────┤  filter_venues
//!                   (time_of_day parse)    ▼
//!                                     result set ── resolve_tap / resolve_pin ──▶ Venue
//! ```
//!
//! Everything here is synchronous and side-effect free apart from logging:
//! no internal state, no caching, safe to call from any thread.

mod catalog;
mod criteria;
mod days;
mod error;
mod geo;
mod matcher;
mod time_of_day;
mod venue;


pub use catalog::{Catalog, filter_venues};
pub use criteria::{DEFAULT_END_TIME, DEFAULT_START_TIME, FilterCriteria, UnparsableTime};
pub use days::{DaySet, WEEK, parse_weekday, weekday_name};
pub use error::{Error, Result};
pub use geo::{Coordinate, MapPin, resolve_pin, resolve_tap, shadowed_venues};
pub use matcher::{Matcher, matches};
pub use time_of_day::{TimeFormat, TimeOfDay, hour_options, parse_time_to_hours};
pub use venue::{ScheduleEntry, Venue};
