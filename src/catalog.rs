//! Catalog filtering.
//!
//! A venue is in the result set when its name contains the search text, its
//! full address contains the location text (both case-insensitive, empty text
//! matches everything), and at least one schedule entry passes the
//! [`Matcher`]. Results keep catalog order and are recomputed on every call.

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::venue::Venue;
use std::io::Read;

/// Filter `venues` by `criteria`, preserving their order.
///
/// Accepts any iterator of venue references, so a previous result can be
/// filtered again directly.
///
/// ```
/// use happy_hours::{FilterCriteria, Venue, filter_venues};
///
/// let venues: Vec<Venue> = Vec::new();
/// assert!(filter_venues(&venues, &FilterCriteria::default()).is_empty());
/// ```
pub fn filter_venues<'a, I>(venues: I, criteria: &FilterCriteria) -> Vec<&'a Venue>
where
    I: IntoIterator<Item = &'a Venue>,
{
    let matcher = Matcher::new(criteria);
    let search = criteria.search_text.to_lowercase();
    let location = criteria.location_text.to_lowercase();

    venues
        .into_iter()
        .filter(|venue| contains_folded(&venue.name, &search))
        .filter(|venue| contains_folded(&venue.full_address(), &location))
        .filter(|venue| matcher.venue_qualifies(venue))
        .collect()
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// The venues from one catalog fetch.
///
/// A new fetch replaces the catalog wholesale; records are never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    venues: Vec<Venue>,
}

impl Catalog {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// Decode a catalog response: a JSON array of venue objects.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Lookup by catalog id.
    pub fn get(&self, id: i64) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    /// The result set for `criteria`.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Venue> {
        filter_venues(&self.venues, criteria)
    }
}

impl From<Vec<Venue>> for Catalog {
    fn from(venues: Vec<Venue>) -> Self {
        Self::new(venues)
    }
}
