//! Persistence port for the country, city and address tables.
//!
//! Every call goes to the backing store; implementations keep no cache
//! between calls.

use std::future::Future;

use crate::domain::{
    Address, AddressWithCity, City, CityId, CityWithCountry, Country, CountryId, NewAddress,
    NewCity, NewCountry,
};
use crate::error::Result;

/// Storage operations for the three sakila tables.
///
/// # Implementation Notes
///
/// - Lists come back in key order.
/// - Name lookups are exact matches.
/// - Inserts must reject a dangling foreign key, either through the store's
///   own constraint or an explicit check.
pub trait Store: Send + Sync {
    /// All countries.
    fn list_countries(&self) -> impl Future<Output = Result<Vec<Country>>> + Send;

    /// All cities, each with its country joined.
    fn list_cities(&self) -> impl Future<Output = Result<Vec<CityWithCountry>>> + Send;

    /// All addresses, each with its city and that city's country joined.
    fn list_addresses(&self) -> impl Future<Output = Result<Vec<AddressWithCity>>> + Send;

    /// First country whose name matches exactly.
    fn find_country_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Country>>> + Send;

    /// Country by primary key.
    fn get_country(&self, id: CountryId) -> impl Future<Output = Result<Option<Country>>> + Send;

    /// Insert a country and return the stored row.
    fn insert_country(&self, country: &NewCountry) -> impl Future<Output = Result<Country>> + Send;

    /// City matching both name and country.
    fn find_city(
        &self,
        name: &str,
        country_id: CountryId,
    ) -> impl Future<Output = Result<Option<City>>> + Send;

    /// First city (lowest id) whose name matches, in any country.
    fn find_city_by_name(&self, name: &str) -> impl Future<Output = Result<Option<City>>> + Send;

    /// City by primary key.
    fn get_city(&self, id: CityId) -> impl Future<Output = Result<Option<City>>> + Send;

    /// Insert a city and return the stored row.
    fn insert_city(&self, city: &NewCity) -> impl Future<Output = Result<City>> + Send;

    /// Insert an address and return the stored row.
    fn insert_address(&self, address: &NewAddress)
        -> impl Future<Output = Result<Address>> + Send;
}
