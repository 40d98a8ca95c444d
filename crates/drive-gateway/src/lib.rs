//! GraphQL and HTTP implementations of the DriveDesk collaborator traits.
//!
//! [`RentalGateway`] talks to the rental GraphQL API and implements the
//! catalog, booking and auth seams plus the admin resources. The payment
//! intent endpoint and the card processor are plain JSON over HTTP and live
//! in their own types.

pub mod documents;

mod admin;
mod error;
mod payments;

#[cfg(test)]
pub(crate) mod testing;

pub use admin::{
    BookingsResource, FeaturesResource, PricesResource, UsersResource, VehiclesResource,
};
pub use payments::{HttpCardProcessor, HttpIntentEndpoint};

use async_trait::async_trait;
use drive_auth::{AdminLogin, AuthApi, Credentials, RegisteredUser, UserLogin};
use drive_cache::Cache;
use drive_commerce::admin::NewUser;
use drive_commerce::api::{ApiError, BookingApi, CatalogApi};
use drive_commerce::booking::CreateBooking;
use drive_commerce::catalog::{Vehicle, VehicleSummary};
use drive_commerce::ids::{BookingId, VehicleId};
use drive_commerce::session::SessionStore;
use drive_data::GraphqlClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::error::api_error;

/// Which stored token authorizes a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bearer {
    Anonymous,
    User,
    Admin,
}

/// `{ id }` selection of a create mutation.
#[derive(Deserialize)]
pub(crate) struct Created {
    pub id: String,
}

/// Client for the rental GraphQL API.
#[derive(Clone)]
pub struct RentalGateway {
    graphql: GraphqlClient,
    sessions: SessionStore,
}

impl RentalGateway {
    /// Bearer tokens are read from `cache` on every call.
    pub fn new(graphql: GraphqlClient, cache: Cache) -> Self {
        Self {
            graphql,
            sessions: SessionStore::new(cache),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.graphql.endpoint()
    }

    pub fn admin_users(&self) -> UsersResource {
        UsersResource::new(self.clone())
    }

    pub fn admin_vehicles(&self) -> VehiclesResource {
        VehiclesResource::new(self.clone())
    }

    pub fn admin_prices(&self) -> PricesResource {
        PricesResource::new(self.clone())
    }

    pub fn admin_features(&self) -> FeaturesResource {
        FeaturesResource::new(self.clone())
    }

    pub fn admin_bookings(&self) -> BookingsResource {
        BookingsResource::new(self.clone())
    }

    fn token(&self, bearer: Bearer) -> Option<String> {
        let token = match bearer {
            Bearer::Anonymous => return None,
            Bearer::User => self.sessions.auth_token(),
            Bearer::Admin => self.sessions.admin_token(),
        };
        token.unwrap_or_else(|err| {
            warn!(error = %err, "could not read stored token, sending without it");
            None
        })
    }

    /// Run `document` and decode the `field` member of its data.
    pub(crate) async fn call<V, T>(
        &self,
        document: &str,
        variables: &V,
        bearer: Bearer,
        field: &str,
    ) -> Result<T, ApiError>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        let token = self.token(bearer);
        debug!(field, authorized = token.is_some(), "graphql call");

        let mut data: Map<String, Value> = self
            .graphql
            .execute(document, variables, token.as_deref())
            .await
            .map_err(|err| {
                warn!(field, error = %err, "graphql call failed");
                api_error(err)
            })?;

        let value = data
            .remove(field)
            .ok_or_else(|| ApiError::Decode(format!("response has no `{}` field", field)))?;
        serde_json::from_value(value).map_err(|err| ApiError::Decode(format!("{}: {}", field, err)))
    }

    /// Run a delete mutation. A `false` result counts as a failure.
    pub(crate) async fn delete<I: Serialize + Sync>(
        &self,
        document: &str,
        id: &I,
        field: &str,
    ) -> Result<(), ApiError> {
        let acknowledged: Value = self
            .call(document, &json!({ "id": id }), Bearer::Admin, field)
            .await?;
        if acknowledged == Value::Bool(false) {
            return Err(ApiError::Decode(format!("{} was not acknowledged", field)));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for RentalGateway {
    async fn vehicles(&self) -> Result<Vec<VehicleSummary>, ApiError> {
        self.call(documents::GET_VEHICLES, &json!({}), Bearer::User, "vehicles")
            .await
    }

    async fn vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, ApiError> {
        self.call(documents::GET_VEHICLE, &json!({ "id": id }), Bearer::User, "vehicle")
            .await
    }
}

#[async_trait]
impl BookingApi for RentalGateway {
    async fn create_booking(&self, request: &CreateBooking) -> Result<BookingId, ApiError> {
        let created: Created = self
            .call(documents::CREATE_BOOKING, request, Bearer::User, "createBooking")
            .await?;
        Ok(BookingId::new(created.id))
    }
}

#[async_trait]
impl AuthApi for RentalGateway {
    async fn login_user(&self, credentials: &Credentials) -> Result<UserLogin, ApiError> {
        self.call(documents::LOGIN_USER, credentials, Bearer::Anonymous, "loginUser")
            .await
    }

    async fn login_admin(&self, credentials: &Credentials) -> Result<AdminLogin, ApiError> {
        self.call(documents::LOGIN_ADMIN, credentials, Bearer::Anonymous, "loginAdmin")
            .await
    }

    async fn register(&self, user: &NewUser) -> Result<RegisteredUser, ApiError> {
        self.call(documents::CREATE_USER, user, Bearer::Anonymous, "createUser")
            .await
    }
}
