//! Country records.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::error::DomainError;
use super::id::CountryId;

/// Width of the `country.country` column.
pub const COUNTRY_NAME_MAX: usize = 50;

/// A stored `country` row.
///
/// Serializes with the table's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    #[serde(rename = "country_id")]
    pub id: CountryId,
    #[serde(rename = "country")]
    pub name: String,
    pub last_update: NaiveDateTime,
}

/// A country waiting to be inserted. `last_update` is defaulted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    name: String,
}

impl NewCountry {
    /// # Errors
    /// Returns [`DomainError::FieldTooLong`] if the name exceeds the column width.
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        super::check_width("country", &name, COUNTRY_NAME_MAX)?;
        Ok(Self { name })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_country_accepts_column_width() {
        let name = "x".repeat(COUNTRY_NAME_MAX);
        assert_eq!(NewCountry::try_new(name.clone()).unwrap().name(), name);
    }

    #[test]
    fn new_country_rejects_overlong_name() {
        let err = NewCountry::try_new("x".repeat(COUNTRY_NAME_MAX + 1)).unwrap_err();
        assert_eq!(
            err,
            DomainError::FieldTooLong {
                field: "country",
                max: 50,
                len: 51
            }
        );
    }

    #[test]
    fn country_serializes_with_column_names() {
        let country = Country {
            id: CountryId::new(1),
            name: "Wakanda".into(),
            last_update: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        };

        let value = serde_json::to_value(&country).unwrap();
        assert_eq!(value["country_id"], 1);
        assert_eq!(value["country"], "Wakanda");
        assert_eq!(value["last_update"], "2026-01-01T00:00:00");
    }
}
