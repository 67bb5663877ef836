//! Error types for the crate.

use thiserror::Error;

/// Result type for fallible catalog and parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by strict parsing and catalog decoding.
///
/// Matching and filtering never fail; these only come out of the strict
/// entry points (`TimeOfDay::parse`, `Catalog::from_json`, ...).
#[derive(Error, Debug)]
pub enum Error {
    /// Time string matched none of the accepted formats.
    #[error("unrecognized time of day: {input:?} (expected \"h:mm AM\" or \"h AM\")")]
    InvalidTime { input: String },

    /// Weekday name that is not Monday through Sunday.
    #[error("unknown weekday: {0:?}")]
    UnknownWeekday(String),

    /// Catalog document could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
