//! Builders for stored records used across tests.
//!
//! Rows built here carry a fixed `last_update` so they compare equal
//! regardless of when the test runs.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{Address, AddressId, City, CityId, Country, CountryId};

/// 2006-02-15 04:44:00, the timestamp stamped on every sakila sample row.
pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2006, 2, 15)
        .and_then(|d| d.and_hms_opt(4, 44, 0))
        .unwrap_or_default()
}

/// Create a stored [`Country`].
pub fn country(id: i32, name: &str) -> Country {
    Country {
        id: CountryId::new(id),
        name: name.to_string(),
        last_update: timestamp(),
    }
}

/// Create a stored [`City`] under `country_id`.
pub fn city(id: i32, name: &str, country_id: i32) -> City {
    City {
        id: CityId::new(id),
        name: name.to_string(),
        country_id: CountryId::new(country_id),
        last_update: timestamp(),
    }
}

/// Create a stored [`Address`] in `city_id` with only the required columns set.
pub fn address(id: i32, line: &str, city_id: i32) -> Address {
    Address {
        id: AddressId::new(id),
        address: line.to_string(),
        address2: None,
        district: "District".to_string(),
        city_id: CityId::new(city_id),
        postal_code: None,
        phone: "555-0100".to_string(),
        location: None,
        last_update: timestamp(),
    }
}
