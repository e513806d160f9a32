//! SQLite store implementation.
//!
//! Maps the `country`, `city` and `address` tables onto domain records using
//! Diesel joins for the eager city/country includes.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    AddressRow, CityRow, CountryRow, NewAddressRow, NewCityRow, NewCountryRow,
};
use crate::adapter::outbound::sqlite::database::schema::{address, city, country};
use crate::domain::{
    Address, AddressId, AddressWithCity, City, CityId, CityWithCountry, Country, CountryId,
    DomainError, GeoPoint, NewAddress, NewCity, NewCountry,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::Store;

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// SQLite-backed store.
///
/// Implements the [`Store`] trait over an injected connection pool.
pub struct SqliteStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<Conn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    fn country_from_row(row: CountryRow) -> Country {
        Country {
            id: CountryId::new(row.country_id),
            name: row.name,
            last_update: row.last_update,
        }
    }

    fn city_from_row(row: CityRow) -> City {
        City {
            id: CityId::new(row.city_id),
            name: row.name,
            country_id: CountryId::new(row.country_id),
            last_update: row.last_update,
        }
    }

    fn address_from_row(row: AddressRow) -> Result<Address> {
        let location = row
            .location
            .as_deref()
            .map(str::parse::<GeoPoint>)
            .transpose()?;

        Ok(Address {
            id: AddressId::new(row.address_id),
            address: row.address_line,
            address2: row.address2,
            district: row.district,
            city_id: CityId::new(row.city_id),
            postal_code: row.postal_code,
            phone: row.phone,
            location,
            last_update: row.last_update,
        })
    }

    /// Translate a failed insert, naming the dangling reference when the
    /// store's foreign key rejected it.
    fn insert_error(err: DieselError, dangling: DomainError) -> Error {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                Error::Domain(dangling)
            }
            other => Error::Database(other.to_string()),
        }
    }
}

fn db_err(err: DieselError) -> Error {
    Error::Database(err.to_string())
}

impl Store for SqliteStore {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        let mut conn = self.conn()?;

        let rows: Vec<CountryRow> = country::table
            .select(CountryRow::as_select())
            .order(country::country_id.asc())
            .load(&mut conn)
            .map_err(db_err)?;

        Ok(rows.into_iter().map(Self::country_from_row).collect())
    }

    async fn list_cities(&self) -> Result<Vec<CityWithCountry>> {
        let mut conn = self.conn()?;

        let rows: Vec<(CityRow, CountryRow)> = city::table
            .inner_join(country::table)
            .select((CityRow::as_select(), CountryRow::as_select()))
            .order(city::city_id.asc())
            .load(&mut conn)
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|(city_row, country_row)| CityWithCountry {
                city: Self::city_from_row(city_row),
                country: Self::country_from_row(country_row),
            })
            .collect())
    }

    async fn list_addresses(&self) -> Result<Vec<AddressWithCity>> {
        let mut conn = self.conn()?;

        let rows: Vec<(AddressRow, CityRow, CountryRow)> = address::table
            .inner_join(city::table.inner_join(country::table))
            .select((
                AddressRow::as_select(),
                CityRow::as_select(),
                CountryRow::as_select(),
            ))
            .order(address::address_id.asc())
            .load(&mut conn)
            .map_err(db_err)?;

        rows.into_iter()
            .map(|(address_row, city_row, country_row)| {
                Ok(AddressWithCity {
                    address: Self::address_from_row(address_row)?,
                    city: CityWithCountry {
                        city: Self::city_from_row(city_row),
                        country: Self::country_from_row(country_row),
                    },
                })
            })
            .collect()
    }

    async fn find_country_by_name(&self, name: &str) -> Result<Option<Country>> {
        let mut conn = self.conn()?;

        let row: Option<CountryRow> = country::table
            .filter(country::name.eq(name))
            .order(country::country_id.asc())
            .select(CountryRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(Self::country_from_row))
    }

    async fn get_country(&self, id: CountryId) -> Result<Option<Country>> {
        let mut conn = self.conn()?;

        let row: Option<CountryRow> = country::table
            .find(id.get())
            .select(CountryRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(Self::country_from_row))
    }

    async fn insert_country(&self, new: &NewCountry) -> Result<Country> {
        let mut conn = self.conn()?;

        let row: CountryRow = diesel::insert_into(country::table)
            .values(&NewCountryRow { name: new.name() })
            .returning(CountryRow::as_returning())
            .get_result(&mut conn)
            .map_err(db_err)?;

        Ok(Self::country_from_row(row))
    }

    async fn find_city(&self, name: &str, country_id: CountryId) -> Result<Option<City>> {
        let mut conn = self.conn()?;

        let row: Option<CityRow> = city::table
            .filter(city::name.eq(name))
            .filter(city::country_id.eq(country_id.get()))
            .order(city::city_id.asc())
            .select(CityRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(Self::city_from_row))
    }

    async fn find_city_by_name(&self, name: &str) -> Result<Option<City>> {
        let mut conn = self.conn()?;

        let row: Option<CityRow> = city::table
            .filter(city::name.eq(name))
            .order(city::city_id.asc())
            .select(CityRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(Self::city_from_row))
    }

    async fn get_city(&self, id: CityId) -> Result<Option<City>> {
        let mut conn = self.conn()?;

        let row: Option<CityRow> = city::table
            .find(id.get())
            .select(CityRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(Self::city_from_row))
    }

    async fn insert_city(&self, new: &NewCity) -> Result<City> {
        let mut conn = self.conn()?;

        let country_exists: bool =
            diesel::select(diesel::dsl::exists(country::table.find(new.country_id().get())))
                .get_result(&mut conn)
                .map_err(db_err)?;
        if !country_exists {
            return Err(DomainError::UnknownCountry(new.country_id()).into());
        }

        let row: CityRow = diesel::insert_into(city::table)
            .values(&NewCityRow {
                name: new.name(),
                country_id: new.country_id().get(),
            })
            .returning(CityRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| Self::insert_error(e, DomainError::UnknownCountry(new.country_id())))?;

        Ok(Self::city_from_row(row))
    }

    async fn insert_address(&self, new: &NewAddress) -> Result<Address> {
        let mut conn = self.conn()?;

        let city_exists: bool =
            diesel::select(diesel::dsl::exists(city::table.find(new.city_id().get())))
                .get_result(&mut conn)
                .map_err(db_err)?;
        if !city_exists {
            return Err(DomainError::UnknownCity(new.city_id()).into());
        }

        let row: AddressRow = diesel::insert_into(address::table)
            .values(&NewAddressRow {
                address_line: new.address(),
                address2: new.address2(),
                district: new.district(),
                city_id: new.city_id().get(),
                postal_code: new.postal_code(),
                phone: new.phone(),
                location: new.location().map(|point| point.to_wkt()),
            })
            .returning(AddressRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| Self::insert_error(e, DomainError::UnknownCity(new.city_id())))?;

        Self::address_from_row(row)
    }
}
