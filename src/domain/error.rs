//! Domain validation errors.
//!
//! Raised before anything reaches the store: column widths taken from the
//! sakila schema, malformed points, and foreign keys that point nowhere.

use thiserror::Error;

use super::id::{CityId, CountryId};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Text is wider than its column allows.
    #[error("{field} is {len} characters long, the limit is {max}")]
    FieldTooLong {
        /// Column name.
        field: &'static str,
        /// Column width.
        max: usize,
        /// Length of the rejected value, in characters.
        len: usize,
    },

    /// A location could not be read as two coordinates.
    #[error("invalid point '{input}': {reason}")]
    InvalidPoint {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A city referenced a country id that does not exist.
    #[error("country {0} does not exist")]
    UnknownCountry(CountryId),

    /// An address referenced a city id that does not exist.
    #[error("city {0} does not exist")]
    UnknownCity(CityId),
}
