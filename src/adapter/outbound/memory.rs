//! In-memory store implementation for testing.
//!
//! Mirrors the SQLite store's behavior: auto-incrementing keys starting at 1,
//! key-ordered lists, exact name matches and rejected dangling references.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{
    Address, AddressId, AddressWithCity, City, CityId, CityWithCountry, Country, CountryId,
    DomainError, NewAddress, NewCity, NewCountry,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::Store;

#[derive(Debug, Default)]
struct Tables {
    countries: BTreeMap<CountryId, Country>,
    cities: BTreeMap<CityId, City>,
    addresses: BTreeMap<AddressId, Address>,
}

impl Tables {
    fn next_key<K: Ord, V>(map: &BTreeMap<K, V>, key: impl Fn(&K) -> i32) -> i32 {
        map.keys().next_back().map_or(1, |last| key(last) + 1)
    }

    fn joined_city(&self, city: &City) -> Result<CityWithCountry> {
        let country = self
            .countries
            .get(&city.country_id)
            .cloned()
            .ok_or_else(|| Error::Database(format!("city {} has no country", city.id)))?;
        Ok(CityWithCountry {
            city: city.clone(),
            country,
        })
    }
}

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    fail_writes: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert fail with the given database error.
    pub fn fail_writes(&self, message: impl Into<String>) {
        *self.fail_writes.write() = Some(message.into());
    }

    /// Number of stored (countries, cities, addresses).
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read();
        (
            tables.countries.len(),
            tables.cities.len(),
            tables.addresses.len(),
        )
    }

    fn check_writable(&self) -> Result<()> {
        match self.fail_writes.read().as_ref() {
            Some(message) => Err(Error::Database(message.clone())),
            None => Ok(()),
        }
    }

    fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

impl Store for MemoryStore {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        Ok(self.tables.read().countries.values().cloned().collect())
    }

    async fn list_cities(&self) -> Result<Vec<CityWithCountry>> {
        let tables = self.tables.read();
        tables
            .cities
            .values()
            .map(|city| tables.joined_city(city))
            .collect()
    }

    async fn list_addresses(&self) -> Result<Vec<AddressWithCity>> {
        let tables = self.tables.read();
        tables
            .addresses
            .values()
            .map(|address| {
                let city = tables
                    .cities
                    .get(&address.city_id)
                    .ok_or_else(|| Error::Database(format!("address {} has no city", address.id)))?;
                Ok(AddressWithCity {
                    address: address.clone(),
                    city: tables.joined_city(city)?,
                })
            })
            .collect()
    }

    async fn find_country_by_name(&self, name: &str) -> Result<Option<Country>> {
        Ok(self
            .tables
            .read()
            .countries
            .values()
            .find(|country| country.name == name)
            .cloned())
    }

    async fn get_country(&self, id: CountryId) -> Result<Option<Country>> {
        Ok(self.tables.read().countries.get(&id).cloned())
    }

    async fn insert_country(&self, new: &NewCountry) -> Result<Country> {
        self.check_writable()?;
        let mut tables = self.tables.write();

        let id = CountryId::new(Tables::next_key(&tables.countries, |k| k.get()));
        let country = Country {
            id,
            name: new.name().to_string(),
            last_update: Self::now(),
        };
        tables.countries.insert(id, country.clone());
        Ok(country)
    }

    async fn find_city(&self, name: &str, country_id: CountryId) -> Result<Option<City>> {
        Ok(self
            .tables
            .read()
            .cities
            .values()
            .find(|city| city.name == name && city.country_id == country_id)
            .cloned())
    }

    async fn find_city_by_name(&self, name: &str) -> Result<Option<City>> {
        Ok(self
            .tables
            .read()
            .cities
            .values()
            .find(|city| city.name == name)
            .cloned())
    }

    async fn get_city(&self, id: CityId) -> Result<Option<City>> {
        Ok(self.tables.read().cities.get(&id).cloned())
    }

    async fn insert_city(&self, new: &NewCity) -> Result<City> {
        self.check_writable()?;
        let mut tables = self.tables.write();

        if !tables.countries.contains_key(&new.country_id()) {
            return Err(DomainError::UnknownCountry(new.country_id()).into());
        }

        let id = CityId::new(Tables::next_key(&tables.cities, |k| k.get()));
        let city = City {
            id,
            name: new.name().to_string(),
            country_id: new.country_id(),
            last_update: Self::now(),
        };
        tables.cities.insert(id, city.clone());
        Ok(city)
    }

    async fn insert_address(&self, new: &NewAddress) -> Result<Address> {
        self.check_writable()?;
        let mut tables = self.tables.write();

        if !tables.cities.contains_key(&new.city_id()) {
            return Err(DomainError::UnknownCity(new.city_id()).into());
        }

        let id = AddressId::new(Tables::next_key(&tables.addresses, |k| k.get()));
        let address = Address {
            id,
            address: new.address().to_string(),
            address2: new.address2().map(str::to_string),
            district: new.district().to_string(),
            city_id: new.city_id(),
            postal_code: new.postal_code().map(str::to_string),
            phone: new.phone().to_string(),
            location: new.location(),
            last_update: Self::now(),
        };
        tables.addresses.insert(id, address.clone());
        Ok(address)
    }
}
