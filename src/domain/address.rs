//! Address records and the address → city association.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::city::CityWithCountry;
use super::error::DomainError;
use super::geo::GeoPoint;
use super::id::{AddressId, CityId};
use super::{check_width, non_empty};

/// Width of `address.address` and `address.address2`.
pub const ADDRESS_LINE_MAX: usize = 50;
/// Width of `address.district`.
pub const DISTRICT_MAX: usize = 20;
/// Width of `address.postal_code`.
pub const POSTAL_CODE_MAX: usize = 10;
/// Width of `address.phone`.
pub const PHONE_MAX: usize = 20;

/// A stored `address` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    #[serde(rename = "address_id")]
    pub id: AddressId,
    pub address: String,
    pub address2: Option<String>,
    pub district: String,
    pub city_id: CityId,
    pub postal_code: Option<String>,
    pub phone: String,
    pub location: Option<GeoPoint>,
    pub last_update: NaiveDateTime,
}

/// Address fields as entered by the user, before a city is chosen.
///
/// Optional text that is empty becomes `None`. The location is never
/// filled in on the user's behalf.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressDraft {
    address: String,
    address2: Option<String>,
    district: String,
    phone: String,
    postal_code: Option<String>,
    location: Option<GeoPoint>,
}

impl AddressDraft {
    /// # Errors
    /// Returns [`DomainError::FieldTooLong`] for the first field wider than its column.
    pub fn try_new(
        address: impl Into<String>,
        address2: Option<String>,
        district: impl Into<String>,
        phone: impl Into<String>,
        postal_code: Option<String>,
    ) -> Result<Self, DomainError> {
        let address = address.into();
        let address2 = non_empty(address2);
        let district = district.into();
        let phone = phone.into();
        let postal_code = non_empty(postal_code);

        check_width("address", &address, ADDRESS_LINE_MAX)?;
        if let Some(line) = &address2 {
            check_width("address2", line, ADDRESS_LINE_MAX)?;
        }
        check_width("district", &district, DISTRICT_MAX)?;
        check_width("phone", &phone, PHONE_MAX)?;
        if let Some(code) = &postal_code {
            check_width("postal_code", code, POSTAL_CODE_MAX)?;
        }

        Ok(Self {
            address,
            address2,
            district,
            phone,
            postal_code,
            location: None,
        })
    }

    /// Attach an optional point.
    #[must_use]
    pub fn with_location(mut self, location: Option<GeoPoint>) -> Self {
        self.location = location;
        self
    }

    /// Bind the draft to the city it will be stored under.
    #[must_use]
    pub fn in_city(self, city_id: CityId) -> NewAddress {
        NewAddress {
            draft: self,
            city_id,
        }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// An address waiting to be inserted under an existing city.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    draft: AddressDraft,
    city_id: CityId,
}

impl NewAddress {
    #[must_use]
    pub fn address(&self) -> &str {
        &self.draft.address
    }

    #[must_use]
    pub fn address2(&self) -> Option<&str> {
        self.draft.address2.as_deref()
    }

    #[must_use]
    pub fn district(&self) -> &str {
        &self.draft.district
    }

    #[must_use]
    pub const fn city_id(&self) -> CityId {
        self.city_id
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.draft.postal_code.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.draft.phone
    }

    #[must_use]
    pub const fn location(&self) -> Option<GeoPoint> {
        self.draft.location
    }
}

/// An address with its city, and the city's country, eagerly joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressWithCity {
    #[serde(flatten)]
    pub address: Address,
    pub city: CityWithCountry,
}
