use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::ids::{FeatureId, PriceId, VariantTypeId, VehicleId};
use crate::money::format_inr;

/// A trim/configuration a vehicle is offered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantType {
    pub id: VariantTypeId,
    pub name: String,
}

/// Bare reference to a variant type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRef {
    pub id: VariantTypeId,
}

/// Manufacturer or model as nested in catalog queries. The storefront
/// only asks for the name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// Nested record with both id and name, as requested by admin queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub name: String,
}

/// Technical specification fields of a feature set.
///
/// Every field may be missing or null in API responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAttributes {
    #[serde(default)]
    pub engine_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub horsepower: Option<f64>,
    #[serde(default)]
    pub torque: Option<f64>,
    #[serde(default)]
    pub fuel_efficiency: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub safety_features: Vec<String>,
    #[serde(default)]
    pub infotainment: Option<String>,
}

impl FeatureAttributes {
    /// Label/value pairs for display, with units.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        fn or_dash<T: ToString>(value: &Option<T>, unit: &str) -> String {
            match value {
                Some(v) => format!("{}{}", v.to_string(), unit),
                None => "-".to_string(),
            }
        }

        vec![
            ("Engine Type", or_dash(&self.engine_type, "")),
            ("Transmission", or_dash(&self.transmission, "")),
            ("Horsepower", or_dash(&self.horsepower, " HP")),
            ("Torque", or_dash(&self.torque, " Nm")),
            ("Fuel Efficiency", or_dash(&self.fuel_efficiency, " km/l")),
            ("Dimensions", or_dash(&self.dimensions, "")),
            ("Weight", or_dash(&self.weight, " kg")),
            ("Safety Features", self.safety_features.join(", ")),
            ("Infotainment", or_dash(&self.infotainment, "")),
        ]
    }
}

/// A feature set scoped to one variant type of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    pub id: FeatureId,
    #[serde(flatten)]
    pub attributes: FeatureAttributes,
    pub vehicle_type: VariantRef,
}

/// Price of one variant type of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePrice {
    pub id: PriceId,
    pub price: f64,
    pub vehicle_type: VariantType,
}

/// Catalog listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub id: VehicleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub available_quantity: i32,
    #[serde(default)]
    pub manufacturer: Option<NamedRef>,
    #[serde(default)]
    pub model: Option<NamedRef>,
}

/// A vehicle with its variants, feature sets and prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_images: Vec<String>,
    #[serde(default)]
    pub available_quantity: i32,
    #[serde(default)]
    pub manufacturer: Option<NamedRef>,
    #[serde(default)]
    pub model: Option<NamedRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle_types: Vec<VariantType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<FeatureSet>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle_prices: Vec<VehiclePrice>,
}

impl Vehicle {
    /// Price of the first price entry whose variant type matches.
    pub fn price_for(&self, variant: &VariantTypeId) -> Option<f64> {
        self.vehicle_prices
            .iter()
            .find(|p| &p.vehicle_type.id == variant)
            .map(|p| p.price)
    }

    /// Feature sets belonging to a variant type, in API order.
    pub fn features_for(&self, variant: &VariantTypeId) -> Vec<&FeatureSet> {
        self.features
            .iter()
            .filter(|f| &f.vehicle_type.id == variant)
            .collect()
    }

    pub fn variant_type(&self, variant: &VariantTypeId) -> Option<&VariantType> {
        self.vehicle_types.iter().find(|t| &t.id == variant)
    }

    /// Find a variant type by id or, case-insensitively, by name.
    pub fn find_variant(&self, needle: &str) -> Option<&VariantType> {
        self.vehicle_types
            .iter()
            .find(|t| t.id.as_str() == needle)
            .or_else(|| {
                self.vehicle_types
                    .iter()
                    .find(|t| t.name.eq_ignore_ascii_case(needle))
            })
    }

    /// Primary image followed by the others, skipping blanks.
    pub fn gallery(&self) -> Vec<&str> {
        self.primary_image
            .iter()
            .chain(self.other_images.iter())
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
            .collect()
    }

    /// "Manufacturer Model", or whichever part is known.
    pub fn make_and_model(&self) -> String {
        let parts: Vec<&str> = [self.manufacturer.as_ref(), self.model.as_ref()]
            .into_iter()
            .flatten()
            .map(|r| r.name.as_str())
            .filter(|n| !n.is_empty())
            .collect();
        parts.join(" ")
    }

    /// Price column of the detail page for one variant type.
    pub fn price_label(&self, variant: &VariantTypeId) -> String {
        match self.price_for(variant) {
            Some(price) => format_inr(price),
            None => "Price not available".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sedan_json;

    #[test]
    fn test_vehicle_deserializes_with_null_lists() {
        let vehicle: Vehicle = serde_json::from_str(sedan_json()).unwrap();
        assert!(vehicle.other_images.is_empty());
        assert_eq!(vehicle.vehicle_types.len(), 2);
        assert_eq!(vehicle.features[0].attributes.horsepower, Some(110.0));
        assert_eq!(vehicle.features[0].attributes.infotainment, None);
    }

    #[test]
    fn test_feature_with_null_engine_and_fractional_horsepower() {
        let feature: FeatureSet = serde_json::from_value(serde_json::json!({
            "id": "f9",
            "engineType": null,
            "horsepower": 110.5,
            "torque": null,
            "safetyFeatures": null,
            "vehicleType": {"id": "t1"}
        }))
        .unwrap();
        let attributes = &feature.attributes;
        assert_eq!(attributes.engine_type, None);
        assert_eq!(attributes.transmission, None);
        assert_eq!(attributes.horsepower, Some(110.5));

        let rows = attributes.display_rows();
        assert_eq!(rows[0], ("Engine Type", "-".to_string()));
        assert_eq!(rows[2], ("Horsepower", "110.5 HP".to_string()));
        assert_eq!(rows[3], ("Torque", "-".to_string()));
    }

    #[test]
    fn test_price_for_takes_first_match() {
        let vehicle: Vehicle = serde_json::from_str(sedan_json()).unwrap();
        assert_eq!(vehicle.price_for(&VariantTypeId::new("t1")), Some(500000.0));
        assert_eq!(vehicle.price_for(&VariantTypeId::new("t2")), Some(650000.0));
        assert_eq!(vehicle.price_for(&VariantTypeId::new("t9")), None);
    }

    #[test]
    fn test_features_for_filters_by_variant() {
        let vehicle: Vehicle = serde_json::from_str(sedan_json()).unwrap();
        assert_eq!(vehicle.features_for(&VariantTypeId::new("t1")).len(), 1);
        assert!(vehicle.features_for(&VariantTypeId::new("t2")).is_empty());
    }

    #[test]
    fn test_find_variant_by_id_or_name() {
        let vehicle: Vehicle = serde_json::from_str(sedan_json()).unwrap();
        assert_eq!(vehicle.find_variant("t2").unwrap().name, "Sport");
        assert_eq!(vehicle.find_variant("sport").unwrap().id.as_str(), "t2");
        assert!(vehicle.find_variant("Luxury").is_none());
    }

    #[test]
    fn test_presentation_helpers() {
        let vehicle: Vehicle = serde_json::from_str(sedan_json()).unwrap();
        assert_eq!(vehicle.gallery(), vec!["https://img/astra.jpg"]);
        assert_eq!(vehicle.make_and_model(), "Opel Astra K");
        assert_eq!(
            vehicle.price_label(&VariantTypeId::new("t1")),
            "\u{20b9}500000.00"
        );

        let rows = vehicle.features[0].attributes.display_rows();
        assert!(rows.contains(&("Horsepower", "110 HP".to_string())));
        assert!(rows.contains(&("Fuel Efficiency", "18.5 km/l".to_string())));
        assert!(rows.contains(&("Safety Features", "ABS, Airbags".to_string())));
        assert!(rows.contains(&("Infotainment", "-".to_string())));
    }
}
