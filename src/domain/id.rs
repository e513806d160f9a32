//! Row identifier newtypes.
//!
//! Each table keys its rows with an auto-incrementing integer. Wrapping them
//! keeps a `CityId` from being passed where a `CountryId` is expected.

use std::fmt;

use serde::Serialize;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw key value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// The raw key value.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

row_id! {
    /// Primary key of a `country` row.
    CountryId
}

row_id! {
    /// Primary key of a `city` row.
    CityId
}

row_id! {
    /// Primary key of an `address` row.
    AddressId
}
