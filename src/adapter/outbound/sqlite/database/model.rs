//! Database model types for Diesel ORM.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{address, city, country};

/// Database row for a country.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = country)]
#[diesel(primary_key(country_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CountryRow {
    pub country_id: i32,
    pub name: String,
    pub last_update: NaiveDateTime,
}

/// Database row for a country (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = country)]
pub struct NewCountryRow<'a> {
    pub name: &'a str,
}

/// Database row for a city.
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(table_name = city)]
#[diesel(primary_key(city_id))]
#[diesel(belongs_to(CountryRow, foreign_key = country_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CityRow {
    pub city_id: i32,
    pub name: String,
    pub country_id: i32,
    pub last_update: NaiveDateTime,
}

/// Database row for a city (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = city)]
pub struct NewCityRow<'a> {
    pub name: &'a str,
    pub country_id: i32,
}

/// Database row for an address.
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(table_name = address)]
#[diesel(primary_key(address_id))]
#[diesel(belongs_to(CityRow, foreign_key = city_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AddressRow {
    pub address_id: i32,
    pub address_line: String,
    pub address2: Option<String>,
    pub district: String,
    pub city_id: i32,
    pub postal_code: Option<String>,
    pub phone: String,
    pub location: Option<String>,
    pub last_update: NaiveDateTime,
}

/// Database row for an address (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = address)]
pub struct NewAddressRow<'a> {
    pub address_line: &'a str,
    pub address2: Option<&'a str>,
    pub district: &'a str,
    pub city_id: i32,
    pub postal_code: Option<&'a str>,
    pub phone: &'a str,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};

    #[test]
    fn country_row_roundtrip_with_db() {
        let pool = create_pool(":memory:", 1).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let loaded: CountryRow = diesel::insert_into(country::table)
            .values(&NewCountryRow { name: "Wakanda" })
            .returning(CountryRow::as_returning())
            .get_result(&mut conn)
            .unwrap();

        assert!(loaded.country_id > 0);
        assert_eq!(loaded.name, "Wakanda");
    }

    #[test]
    fn city_row_rejects_missing_country() {
        let pool = create_pool(":memory:", 1).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let result = diesel::insert_into(city::table)
            .values(&NewCityRow {
                name: "Orphanville",
                country_id: 999,
            })
            .execute(&mut conn);

        assert!(result.is_err(), "foreign key should reject dangling country");
    }

    #[test]
    fn rows_join_through_associations() {
        let pool = create_pool(":memory:", 1).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let country_row: CountryRow = diesel::insert_into(country::table)
            .values(&NewCountryRow { name: "Canada" })
            .returning(CountryRow::as_returning())
            .get_result(&mut conn)
            .unwrap();
        diesel::insert_into(city::table)
            .values(&NewCityRow {
                name: "Lethbridge",
                country_id: country_row.country_id,
            })
            .execute(&mut conn)
            .unwrap();

        let cities: Vec<CityRow> = CityRow::belonging_to(&country_row)
            .select(CityRow::as_select())
            .load(&mut conn)
            .unwrap();

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Lethbridge");
    }

    #[test]
    fn address_row_keeps_nulls() {
        let pool = create_pool(":memory:", 1).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let country_id: i32 = diesel::insert_into(country::table)
            .values(&NewCountryRow { name: "Canada" })
            .returning(country::country_id)
            .get_result(&mut conn)
            .unwrap();
        let city_id: i32 = diesel::insert_into(city::table)
            .values(&NewCityRow {
                name: "Lethbridge",
                country_id,
            })
            .returning(city::city_id)
            .get_result(&mut conn)
            .unwrap();

        let row: AddressRow = diesel::insert_into(address::table)
            .values(&NewAddressRow {
                address_line: "47 MySakila Drive",
                address2: None,
                district: "Alberta",
                city_id,
                postal_code: None,
                phone: "555-0100",
                location: None,
            })
            .returning(AddressRow::as_returning())
            .get_result(&mut conn)
            .unwrap();

        assert_eq!(row.city_id, city_id);
        assert!(row.address2.is_none());
        assert!(row.location.is_none());
    }
}
