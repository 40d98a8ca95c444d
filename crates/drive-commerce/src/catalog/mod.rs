//! Vehicle catalog: records returned by the rental API and the variant
//! selection state of the detail page.

mod selection;
mod vehicle;

pub use selection::{BookingSelection, VariantSelector};
pub use vehicle::{
    FeatureAttributes, FeatureSet, NamedRef, Reference, VariantRef, VariantType, Vehicle,
    VehiclePrice, VehicleSummary,
};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
