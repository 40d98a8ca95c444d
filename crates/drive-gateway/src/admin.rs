//! Admin dashboard collections over the rental GraphQL API.
//!
//! All calls carry the admin bearer token.

use async_trait::async_trait;
use drive_commerce::admin::{
    AdminResource, BookingRecord, FeatureRecord, NewFeature, NewUser, PriceFields, PriceRecord,
    UserProfile, UserRecord, VehicleFields, VehicleRecord, WithId,
};
use drive_commerce::api::ApiError;
use drive_commerce::booking::CreateBooking;
use drive_commerce::catalog::FeatureAttributes;
use drive_commerce::ids::{BookingId, FeatureId, PriceId, UserId, VehicleId};
use serde_json::{json, Value};

use crate::documents as doc;
use crate::{Bearer, Created, RentalGateway};

macro_rules! admin_resource {
    (
        $(#[$meta:meta])*
        $name:ident: $label:literal {
            id: $id:ty,
            record: $record:ty,
            new: $new:ty,
            changes: $changes:ty,
            list: ($list_doc:expr, $list_field:literal),
            create: ($create_doc:expr, $create_field:literal),
            update: ($update_doc:expr, $update_field:literal),
            delete: ($delete_doc:expr, $delete_field:literal) $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            gateway: RentalGateway,
        }

        impl $name {
            pub fn new(gateway: RentalGateway) -> Self {
                Self { gateway }
            }
        }

        #[async_trait]
        impl AdminResource for $name {
            type Id = $id;
            type Record = $record;
            type New = $new;
            type Changes = $changes;

            fn name(&self) -> &'static str {
                $label
            }

            async fn list(&self) -> Result<Vec<$record>, ApiError> {
                self.gateway
                    .call($list_doc, &json!({}), Bearer::Admin, $list_field)
                    .await
            }

            async fn create(&self, new: &$new) -> Result<$id, ApiError> {
                let created: Created = self
                    .gateway
                    .call($create_doc, new, Bearer::Admin, $create_field)
                    .await?;
                Ok(<$id>::new(created.id))
            }

            async fn update(&self, id: &$id, changes: &$changes) -> Result<(), ApiError> {
                let _: Value = self
                    .gateway
                    .call($update_doc, &WithId::new(id, changes), Bearer::Admin, $update_field)
                    .await?;
                Ok(())
            }

            async fn delete(&self, id: &$id) -> Result<(), ApiError> {
                self.gateway.delete($delete_doc, id, $delete_field).await
            }
        }
    };
}

admin_resource! {
    /// Storefront user accounts.
    UsersResource: "users" {
        id: UserId,
        record: UserRecord,
        new: NewUser,
        changes: UserProfile,
        list: (doc::GET_USERS, "users"),
        create: (doc::CREATE_USER, "createUser"),
        update: (doc::UPDATE_USER, "updateUser"),
        delete: (doc::DELETE_USER, "deleteUser"),
    }
}

admin_resource! {
    VehiclesResource: "vehicles" {
        id: VehicleId,
        record: VehicleRecord,
        new: VehicleFields,
        changes: VehicleFields,
        list: (doc::GET_ADMIN_VEHICLES, "vehicles"),
        create: (doc::CREATE_VEHICLE, "createVehicle"),
        update: (doc::UPDATE_VEHICLE, "updateVehicle"),
        delete: (doc::DELETE_VEHICLE, "deleteVehicle"),
    }
}

admin_resource! {
    /// Per-variant vehicle prices.
    PricesResource: "prices" {
        id: PriceId,
        record: PriceRecord,
        new: PriceFields,
        changes: PriceFields,
        list: (doc::GET_VEHICLE_PRICES, "vehiclePrices"),
        create: (doc::CREATE_VEHICLE_PRICE, "createVehiclePrice"),
        update: (doc::UPDATE_VEHICLE_PRICE, "updateVehiclePrice"),
        delete: (doc::DELETE_VEHICLE_PRICE, "deleteVehiclePrice"),
    }
}

admin_resource! {
    /// Feature sets. Updates cannot move a set to another variant type.
    FeaturesResource: "features" {
        id: FeatureId,
        record: FeatureRecord,
        new: NewFeature,
        changes: FeatureAttributes,
        list: (doc::GET_FEATURES, "features"),
        create: (doc::CREATE_FEATURE, "createFeatures"),
        update: (doc::UPDATE_FEATURE, "updateFeatures"),
        delete: (doc::DELETE_FEATURE, "deleteFeatures"),
    }
}

admin_resource! {
    BookingsResource: "bookings" {
        id: BookingId,
        record: BookingRecord,
        new: CreateBooking,
        changes: CreateBooking,
        list: (doc::GET_BOOKINGS, "bookings"),
        create: (doc::CREATE_BOOKING, "createBooking"),
        update: (doc::UPDATE_BOOKING, "updateBooking"),
        delete: (doc::DELETE_BOOKING, "deleteBooking"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{gateway, StubTransport};
    use drive_commerce::admin::{AdminConsole, AdminPolicy};
    use drive_commerce::session::SessionStore;

    #[tokio::test]
    async fn test_update_sends_id_beside_fields_with_admin_token() {
        let transport = StubTransport::replying(vec![
            json!({"data": {"updateVehiclePrice": {"id": "P1"}}}),
            json!({"data": {"vehiclePrices": []}}),
        ]);
        let (gateway, cache) = gateway(&transport);
        SessionStore::new(cache).save_admin_token("admin-jwt").unwrap();

        let mut console = AdminConsole::new(gateway.admin_prices());
        let fields = PriceFields {
            vehicle_type_id: "t1".into(),
            vehicle_id: "V1".into(),
            price: 720000.0,
        };
        console.update(&PriceId::new("P1"), &fields).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 2, "update is followed by a refetch");
        let variables = sent[0].json_body().unwrap()["variables"].clone();
        assert_eq!(variables, json!({"id": "P1", "vehicleTypeId": "t1", "vehicleId": "V1", "price": 720000.0}));
        assert_eq!(
            sent[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer admin-jwt")
        );
    }

    #[tokio::test]
    async fn test_create_user_carries_placeholder_password() {
        let transport = StubTransport::replying(vec![
            json!({"data": {"createUser": {"id": "U9", "name": "Ravi", "email": "r@x.in"}}}),
            json!({"data": {"users": [{"id": "U9", "name": "Ravi", "email": "r@x.in"}]}}),
        ]);
        let (gateway, _) = gateway(&transport);
        let mut console = AdminConsole::new(gateway.admin_users());

        let profile = UserProfile {
            name: "Ravi".into(),
            email: "r@x.in".into(),
            ..Default::default()
        };
        let new = NewUser::from_profile(profile, &AdminPolicy::default()).unwrap();
        let id = console.create(&new).await.unwrap();

        assert_eq!(id, UserId::new("U9"));
        assert_eq!(console.records().len(), 1);
        let variables = transport.sent()[0].json_body().unwrap()["variables"].clone();
        assert_eq!(variables["password"], "defaultPassword");
    }

    #[tokio::test]
    async fn test_confirmed_delete_sends_id_only() {
        let transport = StubTransport::replying(vec![
            json!({"data": {"deleteFeatures": true}}),
            json!({"data": {"features": []}}),
        ]);
        let (gateway, _) = gateway(&transport);
        let mut console = AdminConsole::new(gateway.admin_features());

        let pending = console.request_delete(FeatureId::new("F1"));
        console.delete(pending.confirm()).await.unwrap();

        let body = transport.sent()[0].json_body().unwrap();
        assert_eq!(body["variables"], json!({"id": "F1"}));
        assert!(body["query"].as_str().unwrap().contains("deleteFeatures"));
    }

    #[tokio::test]
    async fn test_unacknowledged_delete_fails_without_refetch() {
        let transport =
            StubTransport::replying(vec![json!({"data": {"deleteBooking": false}})]);
        let (gateway, _) = gateway(&transport);
        let mut console = AdminConsole::new(gateway.admin_bookings());

        let pending = console.request_delete(BookingId::new("B1"));
        assert!(console.delete(pending.confirm()).await.is_err());
        assert_eq!(transport.sent().len(), 1);
    }
}
