//! Storage-agnostic domain types.
//!
//! The three sakila records and their relationships:
//!
//! ```text
//! country 1 ──< city 1 ──< address
//! ```
//!
//! Records are append-only: the program creates or reuses rows, it never
//! updates or deletes them.

pub mod address;
pub mod city;
pub mod country;
pub mod error;
pub mod geo;
pub mod id;

pub use address::{Address, AddressDraft, AddressWithCity, NewAddress};
pub use city::{City, CityWithCountry, NewCity};
pub use country::{Country, NewCountry};
pub use error::DomainError;
pub use geo::GeoPoint;
pub use id::{AddressId, CityId, CountryId};

/// Outcome of a find-or-create lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    /// An existing row matched the natural key.
    Found(T),
    /// No row matched, so one was inserted.
    Created(T),
}

impl<T> Resolved<T> {
    /// Borrow the resolved row regardless of branch.
    #[must_use]
    pub fn get(&self) -> &T {
        match self {
            Self::Found(value) | Self::Created(value) => value,
        }
    }

    /// Take the resolved row regardless of branch.
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Found(value) | Self::Created(value) => value,
        }
    }

    /// True when the row was inserted by this lookup.
    #[must_use]
    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Reject text wider than its `VARCHAR(max)` column.
pub(crate) fn check_width(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::FieldTooLong { field, max, len });
    }
    Ok(())
}

/// Empty optional text is stored as NULL. Whitespace is kept as entered.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
