use chrono::{DateTime, SecondsFormat, Utc};
use drive_cache::{Cache, TypedKey};
use serde::{Deserialize, Serialize};

use crate::catalog::{BookingSelection, FeatureSet};
use crate::ids::{BookingId, UserId, VehicleId};
use crate::session::SessionUser;
use crate::CommerceError;

/// ISO-8601 UTC timestamp with millisecond precision, e.g.
/// `2024-05-01T10:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Variables of the `createBooking` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub vehicle_id: VehicleId,
    pub user_id: UserId,
    pub user_name: String,
    pub booking_date: String,
    pub total_price: f64,
}

impl CreateBooking {
    pub fn new(selection: &BookingSelection, user: &SessionUser) -> Self {
        Self {
            vehicle_id: selection.vehicle.id.clone(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            booking_date: iso_timestamp(selection.date),
            total_price: selection.price,
        }
    }
}

/// What was booked, as shown on the summary page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub vehicle_id: VehicleId,
    pub vehicle_name: String,
    pub vehicle_type_name: String,
    pub booking_date: DateTime<Utc>,
    pub total_price: f64,
    pub user_name: String,
    #[serde(default)]
    pub features: Vec<FeatureSet>,
}

impl BookingDraft {
    pub fn new(selection: BookingSelection, user: &SessionUser) -> Self {
        Self {
            vehicle_id: selection.vehicle.id,
            vehicle_name: selection.vehicle.name,
            vehicle_type_name: selection.variant_name,
            booking_date: selection.date,
            total_price: selection.price,
            user_name: user.name.clone(),
            features: selection.features,
        }
    }
}

/// Storage key of the in-progress checkout.
pub const CHECKOUT_CONTEXT: TypedKey<CheckoutContext> = TypedKey::new("carData");

/// Booking id, user and draft, handed from the booking step to the summary
/// and payment steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutContext {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub draft: BookingDraft,
}

impl CheckoutContext {
    pub fn new(booking_id: BookingId, user: &SessionUser, selection: BookingSelection) -> Self {
        Self {
            booking_id,
            user_id: user.id.clone(),
            draft: BookingDraft::new(selection, user),
        }
    }

    pub fn total(&self) -> f64 {
        self.draft.total_price
    }

    /// Overwrite the stored context.
    pub fn persist(&self, cache: &Cache) -> Result<(), CommerceError> {
        cache.store(&CHECKOUT_CONTEXT, self)?;
        Ok(())
    }

    pub fn load(cache: &Cache) -> Result<Option<Self>, CommerceError> {
        Ok(cache.load(&CHECKOUT_CONTEXT)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VariantSelector;
    use crate::fixtures::{asha, sedan};
    use chrono::TimeZone;

    fn selection() -> BookingSelection {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let mut selector = VariantSelector::new(sedan(), date);
        selector.select_variant(Some("t1".into()));
        selector.to_selection().unwrap()
    }

    #[test]
    fn test_create_booking_variables() {
        let request = CreateBooking::new(&selection(), &asha());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["vehicleId"], "V1");
        assert_eq!(json["userId"], "U1");
        assert_eq!(json["userName"], "Asha");
        assert_eq!(json["bookingDate"], "2024-05-01T10:00:00.000Z");
        assert_eq!(json["totalPrice"], 500000.0);
    }

    #[test]
    fn test_checkout_context_survives_storage() {
        let cache = Cache::in_memory();
        let context = CheckoutContext::new(BookingId::new("B77"), &asha(), selection());
        context.persist(&cache).unwrap();

        let loaded = CheckoutContext::load(&cache).unwrap().unwrap();
        assert_eq!(loaded, context);
        assert_eq!(loaded.draft.vehicle_type_name, "Base");
        assert_eq!(loaded.total(), 500000.0);

        cache.clear(&CHECKOUT_CONTEXT).unwrap();
        assert!(CheckoutContext::load(&cache).unwrap().is_none());
    }

    #[test]
    fn test_draft_uses_stored_field_names() {
        let draft = BookingDraft::new(selection(), &asha());
        let json = serde_json::to_value(&draft).unwrap();
        for key in [
            "vehicleId",
            "vehicleName",
            "vehicleTypeName",
            "bookingDate",
            "totalPrice",
            "userName",
            "features",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
