//! Newtype IDs for server-issued identifiers.
//!
//! Every id in the rental API is an opaque string; the newtypes keep a
//! vehicle id from being passed where a variant type id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// A vehicle in the catalog.
    VehicleId
);
define_id!(
    /// A trim/configuration ("Base", "Sport").
    VariantTypeId
);
define_id!(
    /// A feature set scoped to one vehicle and variant type.
    FeatureId
);
define_id!(
    /// A (vehicle, variant type) price entry.
    PriceId
);
define_id!(
    /// A storefront user.
    UserId
);
define_id!(
    /// A server-side booking record.
    BookingId
);
define_id!(ManufacturerId);
define_id!(ModelId);
