//! Seams to the remote rental API and the card processor.
//!
//! The flows in this crate are written against these traits; the
//! `drive-gateway` crate supplies GraphQL/HTTP implementations and tests
//! supply scripted ones.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::booking::CreateBooking;
use crate::catalog::{Vehicle, VehicleSummary};
use crate::checkout::{BillingDetails, CardInput, ClientSecret, ConfirmOutcome, PaymentIntentRequest};
use crate::ids::{BookingId, VehicleId};

/// Failure talking to a remote collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The call exceeded its deadline.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The GraphQL response carried an `errors` array.
    #[error("GraphQL error: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Read access to the vehicle catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List summaries of every vehicle.
    async fn vehicles(&self) -> Result<Vec<VehicleSummary>, ApiError>;

    /// Fetch one vehicle with its variants, features and prices.
    async fn vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, ApiError>;
}

/// The booking mutation.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn create_booking(&self, request: &CreateBooking) -> Result<BookingId, ApiError>;
}

/// Storefront endpoint that creates a payment intent and hands back its
/// client secret.
#[async_trait]
pub trait PaymentIntentApi: Send + Sync {
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<ClientSecret, ApiError>;
}

/// Card confirmation against the payment processor.
///
/// A processor-reported failure (declined card, bad CVC) is an `Ok` with
/// [`ConfirmOutcome::Declined`]; `Err` is reserved for transport problems.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn confirm_card_payment(
        &self,
        secret: &ClientSecret,
        card: &CardInput,
        billing: &BillingDetails,
    ) -> Result<ConfirmOutcome, ApiError>;
}

#[async_trait]
impl<T: CatalogApi + ?Sized> CatalogApi for Arc<T> {
    async fn vehicles(&self) -> Result<Vec<VehicleSummary>, ApiError> {
        (**self).vehicles().await
    }

    async fn vehicle(&self, id: &VehicleId) -> Result<Option<Vehicle>, ApiError> {
        (**self).vehicle(id).await
    }
}

#[async_trait]
impl<T: BookingApi + ?Sized> BookingApi for Arc<T> {
    async fn create_booking(&self, request: &CreateBooking) -> Result<BookingId, ApiError> {
        (**self).create_booking(request).await
    }
}

#[async_trait]
impl<T: PaymentIntentApi + ?Sized> PaymentIntentApi for Arc<T> {
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<ClientSecret, ApiError> {
        (**self).create_payment_intent(request).await
    }
}

#[async_trait]
impl<T: PaymentProcessor + ?Sized> PaymentProcessor for Arc<T> {
    async fn confirm_card_payment(
        &self,
        secret: &ClientSecret,
        card: &CardInput,
        billing: &BillingDetails,
    ) -> Result<ConfirmOutcome, ApiError> {
        (**self).confirm_card_payment(secret, card, billing).await
    }
}
