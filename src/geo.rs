//! Mapping map taps back to venues.
//!
//! A rendered pin only reports its coordinate when tapped. [`resolve_tap`]
//! finds the venue by exact coordinate equality, which cannot tell apart two
//! venues at the same spot: the first one wins and the rest are unreachable
//! (see [`shadowed_venues`]). Pins that carry the venue id ([`MapPin`]) avoid
//! the problem through [`resolve_pin`].

use crate::venue::Venue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A map pin carrying the venue id alongside its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPin {
    pub id: i64,
    pub coordinate: Coordinate,
}

impl From<&Venue> for MapPin {
    fn from(venue: &Venue) -> Self {
        Self { id: venue.id, coordinate: venue.coordinate() }
    }
}

/// First candidate whose coordinate equals `tapped` exactly, if any.
///
/// ```
/// use happy_hours::{Coordinate, Venue, resolve_tap};
///
/// let venues: Vec<Venue> = Vec::new();
/// assert!(resolve_tap(Coordinate::new(45.5, -122.6), &venues).is_none());
/// ```
pub fn resolve_tap<'a, I>(tapped: Coordinate, candidates: I) -> Option<&'a Venue>
where
    I: IntoIterator<Item = &'a Venue>,
{
    candidates.into_iter().find(|venue| venue.coordinate() == tapped)
}

/// Candidate with the pin's id, if it is still displayed.
pub fn resolve_pin<'a, I>(pin: &MapPin, candidates: I) -> Option<&'a Venue>
where
    I: IntoIterator<Item = &'a Venue>,
{
    candidates.into_iter().find(|venue| venue.id == pin.id)
}

/// Venues that [`resolve_tap`] can never return because an earlier candidate
/// sits at the exact same coordinate.
pub fn shadowed_venues<'a, I>(candidates: I) -> Vec<&'a Venue>
where
    I: IntoIterator<Item = &'a Venue>,
{
    let mut seen: Vec<Coordinate> = Vec::new();
    let mut shadowed = Vec::new();

    for venue in candidates {
        let coordinate = venue.coordinate();
        if seen.contains(&coordinate) {
            shadowed.push(venue);
        } else {
            seen.push(coordinate);
        }
    }

    if !shadowed.is_empty() {
        log::debug!("{} venue(s) share a coordinate with an earlier venue", shadowed.len());
    }
    shadowed
}
