//! City records and the city → country association.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::country::Country;
use super::error::DomainError;
use super::id::{CityId, CountryId};

/// Width of the `city.city` column.
pub const CITY_NAME_MAX: usize = 50;

/// A stored `city` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    #[serde(rename = "city_id")]
    pub id: CityId,
    #[serde(rename = "city")]
    pub name: String,
    pub country_id: CountryId,
    pub last_update: NaiveDateTime,
}

/// A city waiting to be inserted under an existing country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    name: String,
    country_id: CountryId,
}

impl NewCity {
    /// # Errors
    /// Returns [`DomainError::FieldTooLong`] if the name exceeds the column width.
    pub fn try_new(name: impl Into<String>, country_id: CountryId) -> Result<Self, DomainError> {
        let name = name.into();
        super::check_width("city", &name, CITY_NAME_MAX)?;
        Ok(Self { name, country_id })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn country_id(&self) -> CountryId {
        self.country_id
    }
}

/// A city with its country eagerly joined.
///
/// Serializes as the city's columns plus a nested `country` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityWithCountry {
    #[serde(flatten)]
    pub city: City,
    pub country: Country,
}
