//! Record and mutation-variable types of the dashboard tables.

use serde::{Deserialize, Serialize};

use crate::booking::CreateBooking;
use crate::catalog::{null_as_default, FeatureAttributes, Reference, VariantType};
use crate::ids::{
    BookingId, FeatureId, ManufacturerId, ModelId, PriceId, UserId, VariantTypeId, VehicleId,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdOnly {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
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
    pub manufacturer: Option<Reference>,
    #[serde(default)]
    pub model: Option<Reference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle_types: Vec<VariantType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<IdOnly>,
}

impl VehicleRecord {
    /// Editable fields, or `None` if manufacturer or model is missing.
    pub fn fields(&self) -> Option<VehicleFields> {
        Some(VehicleFields {
            name: self.name.clone(),
            description: self.description.clone(),
            primary_image: self.primary_image.clone(),
            other_images: self.other_images.clone(),
            available_quantity: self.available_quantity,
            manufacturer_id: ManufacturerId::new(self.manufacturer.as_ref()?.id.clone()),
            model_id: ModelId::new(self.model.as_ref()?.id.clone()),
            vehicle_type_ids: self.vehicle_types.iter().map(|t| t.id.clone()).collect(),
            features_id: self
                .features
                .iter()
                .map(|f| FeatureId::new(f.id.clone()))
                .collect(),
        })
    }
}

/// Variables of `createVehicle` / `updateVehicle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFields {
    pub name: String,
    pub description: String,
    pub primary_image: Option<String>,
    pub other_images: Vec<String>,
    pub available_quantity: i32,
    pub manufacturer_id: ManufacturerId,
    pub model_id: ModelId,
    pub vehicle_type_ids: Vec<VariantTypeId>,
    pub features_id: Vec<FeatureId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub id: PriceId,
    pub price: f64,
    #[serde(default)]
    pub vehicle: Option<Reference>,
    #[serde(default)]
    pub vehicle_type: Option<Reference>,
}

impl PriceRecord {
    pub fn fields(&self) -> Option<PriceFields> {
        Some(PriceFields {
            vehicle_type_id: VariantTypeId::new(self.vehicle_type.as_ref()?.id.clone()),
            vehicle_id: VehicleId::new(self.vehicle.as_ref()?.id.clone()),
            price: self.price,
        })
    }
}

/// Variables of `createVehiclePrice` / `updateVehiclePrice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFields {
    pub vehicle_type_id: VariantTypeId,
    pub vehicle_id: VehicleId,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub id: FeatureId,
    #[serde(flatten)]
    pub attributes: FeatureAttributes,
    #[serde(default)]
    pub vehicle_type: Option<Reference>,
}

/// Variables of `createFeatures`. Updates send only the attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeature {
    #[serde(flatten)]
    pub attributes: FeatureAttributes,
    pub vehicle_type_id: VariantTypeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: BookingId,
    #[serde(default)]
    pub vehicle: Option<Reference>,
    #[serde(default)]
    pub user: Option<Reference>,
    #[serde(default)]
    pub user_name: String,
    pub booking_date: String,
    pub total_price: f64,
}

impl BookingRecord {
    pub fn fields(&self) -> Option<CreateBooking> {
        Some(CreateBooking {
            vehicle_id: VehicleId::new(self.vehicle.as_ref()?.id.clone()),
            user_id: UserId::new(self.user.as_ref()?.id.clone()),
            user_name: self.user_name.clone(),
            booking_date: self.booking_date.clone(),
            total_price: self.total_price,
        })
    }
}
