//! Geographic point attached to an address.
//!
//! Persisted as WKT text, `POINT(x y)`. Input accepts the bare pair
//! (`"37.7749 -122.4194"`), a comma separated pair, or the WKT form.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::DomainError;

/// A planar point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    x: f64,
    y: f64,
}

impl GeoPoint {
    /// Build a point from two finite coordinates.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPoint`] if either coordinate is NaN or infinite.
    pub fn try_new(x: f64, y: f64) -> Result<Self, DomainError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DomainError::InvalidPoint {
                input: format!("{x} {y}"),
                reason: "coordinates must be finite",
            });
        }
        Ok(Self { x, y })
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Well-known text for this point.
    #[must_use]
    pub fn to_wkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POINT({} {})", self.x, self.y)
    }
}

impl FromStr for GeoPoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| DomainError::InvalidPoint {
            input: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        let body = match trimmed.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("point") => trimmed[5..]
                .trim()
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or_else(|| invalid("expected POINT(x y)"))?,
            _ => trimmed,
        };

        let mut parts = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected two coordinates"));
        };

        let x: f64 = x.parse().map_err(|_| invalid("x is not a number"))?;
        let y: f64 = y.parse().map_err(|_| invalid("y is not a number"))?;
        Self::try_new(x, y).map_err(|_| invalid("coordinates must be finite"))
    }
}

impl Serialize for GeoPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
