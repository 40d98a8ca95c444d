//! Admin dashboard: CRUD over users, vehicles, prices, feature sets and
//! bookings.
//!
//! Every resource follows the same protocol. Mutations are sent with the
//! id separate from the edited fields, deletes need an explicit
//! confirmation, and the listing is refetched after each successful
//! mutation.

mod console;
mod records;
mod users;

pub use console::{AdminConsole, ConfirmedDelete, PendingDelete};
pub use records::{
    BookingRecord, FeatureRecord, IdOnly, NewFeature, PriceFields, PriceRecord, VehicleFields,
    VehicleRecord,
};
pub use users::{AdminPolicy, NewUser, UserProfile, UserRecord, DEFAULT_PLACEHOLDER_PASSWORD};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::api::ApiError;

/// One admin-managed collection.
#[async_trait]
pub trait AdminResource: Send + Sync {
    type Id: Clone + fmt::Display + Send + Sync;
    type Record: Clone + Send + Sync;
    /// Fields sent on create.
    type New: Send + Sync;
    /// Fields sent on update, never including the id.
    type Changes: Send + Sync;

    /// Collection name used in logs.
    fn name(&self) -> &'static str;

    async fn list(&self) -> Result<Vec<Self::Record>, ApiError>;
    async fn create(&self, new: &Self::New) -> Result<Self::Id, ApiError>;
    async fn update(&self, id: &Self::Id, changes: &Self::Changes) -> Result<(), ApiError>;
    async fn delete(&self, id: &Self::Id) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: AdminResource + ?Sized> AdminResource for Arc<T> {
    type Id = T::Id;
    type Record = T::Record;
    type New = T::New;
    type Changes = T::Changes;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn list(&self) -> Result<Vec<Self::Record>, ApiError> {
        (**self).list().await
    }

    async fn create(&self, new: &Self::New) -> Result<Self::Id, ApiError> {
        (**self).create(new).await
    }

    async fn update(&self, id: &Self::Id, changes: &Self::Changes) -> Result<(), ApiError> {
        (**self).update(id, changes).await
    }

    async fn delete(&self, id: &Self::Id) -> Result<(), ApiError> {
        (**self).delete(id).await
    }
}

/// Update variables: the id next to the flattened fields.
#[derive(Debug, Serialize)]
pub struct WithId<'a, I: Serialize, F: Serialize> {
    pub id: &'a I,
    #[serde(flatten)]
    pub fields: &'a F,
}

impl<'a, I: Serialize, F: Serialize> WithId<'a, I, F> {
    pub fn new(id: &'a I, fields: &'a F) -> Self {
        Self { id, fields }
    }
}
