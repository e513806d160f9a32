//! Browse and grow the country/city/address catalog.
//!
//! Find-or-create applies at two levels. A country is found by exact name.
//! A city is found by exact name within a country. Addresses are always
//! inserted. Every insert is preceded by a lookup of the row it references.

use tracing::{debug, info};

use crate::domain::{
    Address, AddressDraft, AddressWithCity, City, CityId, CityWithCountry, Country, CountryId,
    DomainError, NewCity, NewCountry, Resolved,
};
use crate::error::Result;
use crate::port::outbound::store::Store;

/// Both halves of a city find-or-create.
#[derive(Debug, Clone, PartialEq)]
pub struct CityResolution {
    pub country: Resolved<Country>,
    pub city: Resolved<City>,
}

/// Use cases over an injected [`Store`].
pub struct Catalog<S> {
    store: S,
}

impl<S: Store> Catalog<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// # Errors
    /// Returns an error if the store query fails.
    pub async fn list_countries(&self) -> Result<Vec<Country>> {
        let countries = self.store.list_countries().await?;
        debug!(count = countries.len(), "listed countries");
        Ok(countries)
    }

    /// # Errors
    /// Returns an error if the store query fails.
    pub async fn list_cities(&self) -> Result<Vec<CityWithCountry>> {
        let cities = self.store.list_cities().await?;
        debug!(count = cities.len(), "listed cities");
        Ok(cities)
    }

    /// # Errors
    /// Returns an error if the store query fails.
    pub async fn list_addresses(&self) -> Result<Vec<AddressWithCity>> {
        let addresses = self.store.list_addresses().await?;
        debug!(count = addresses.len(), "listed addresses");
        Ok(addresses)
    }

    /// Look up a country by exact name, inserting it if absent.
    ///
    /// # Errors
    /// Returns an error if the name is too long or the store fails.
    pub async fn find_or_create_country(&self, name: &str) -> Result<Resolved<Country>> {
        let new = NewCountry::try_new(name)?;

        if let Some(country) = self.store.find_country_by_name(name).await? {
            debug!(country_id = %country.id, country = name, "country already exists");
            return Ok(Resolved::Found(country));
        }

        let country = self.store.insert_country(&new).await?;
        info!(country_id = %country.id, country = name, "country created");
        Ok(Resolved::Created(country))
    }

    /// Resolve (or create) the country, then look up the city by exact name
    /// in that country, inserting it if absent.
    ///
    /// # Errors
    /// Returns an error if a name is too long or the store fails. A failure
    /// after the country was created leaves the country in place.
    pub async fn find_or_create_city(
        &self,
        city_name: &str,
        country_name: &str,
    ) -> Result<CityResolution> {
        let country = self.find_or_create_country(country_name).await?;
        let country_id = country.get().id;

        let city = match self.store.find_city(city_name, country_id).await? {
            Some(city) => {
                debug!(city_id = %city.id, %country_id, city = city_name, "city already exists");
                Resolved::Found(city)
            }
            None => Resolved::Created(self.create_city(city_name, country_id).await?),
        };

        Ok(CityResolution { country, city })
    }

    /// First city with this exact name in any country.
    ///
    /// # Errors
    /// Returns an error if the store query fails.
    pub async fn find_city_by_name(&self, name: &str) -> Result<Option<City>> {
        self.store.find_city_by_name(name).await
    }

    /// Insert a city under an existing country, without a duplicate check.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownCountry`] if the country does not exist,
    /// or an error if the name is too long or the store fails.
    pub async fn create_city(&self, name: &str, country_id: CountryId) -> Result<City> {
        let new = NewCity::try_new(name, country_id)?;

        if self.store.get_country(country_id).await?.is_none() {
            return Err(DomainError::UnknownCountry(country_id).into());
        }

        let city = self.store.insert_city(&new).await?;
        info!(city_id = %city.id, %country_id, city = name, "city created");
        Ok(city)
    }

    /// Insert an address under an existing city.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownCity`] if the city does not exist, or an
    /// error if the store fails.
    pub async fn create_address(&self, draft: AddressDraft, city_id: CityId) -> Result<Address> {
        if self.store.get_city(city_id).await?.is_none() {
            return Err(DomainError::UnknownCity(city_id).into());
        }

        let address = self.store.insert_address(&draft.in_city(city_id)).await?;
        info!(address_id = %address.id, %city_id, "address created");
        Ok(address)
    }
}
