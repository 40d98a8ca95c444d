//! Commerce error types.

use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur in the booking and checkout flows.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Vehicle not found.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// Variant type not offered by the vehicle.
    #[error("Variant type not found: {0}")]
    VariantNotFound(String),

    /// Date before the selection floor.
    #[error("Date {requested} is before {floor}")]
    DateInPast { requested: String, floor: String },

    /// Selection lacks what a booking needs.
    #[error("Selection incomplete: missing {0}")]
    IncompleteSelection(String),

    /// A submission is already in flight.
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// Payment amount could not be used.
    #[error("Invalid payment amount: {0:?}")]
    InvalidAmount(String),

    /// Payment amount disagrees with the persisted checkout context.
    #[error("Payment amount {got} does not match booking total {expected}")]
    AmountMismatch { expected: f64, got: f64 },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// The card processor reported an error.
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    /// The processor settled without an error but did not succeed.
    #[error("Payment not completed (status: {0})")]
    PaymentNotCompleted(String),

    /// A password is required and no placeholder is configured.
    #[error("A password is required to create this user")]
    PasswordRequired,

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Remote API failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Local storage failure.
    #[error("Storage error: {0}")]
    Storage(#[from] drive_cache::CacheError),
}

impl CommerceError {
    /// Whether the failure was caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::DateInPast { .. }
                | CommerceError::IncompleteSelection(_)
                | CommerceError::InvalidAmount(_)
                | CommerceError::AmountMismatch { .. }
                | CommerceError::CheckoutIncomplete(_)
                | CommerceError::PasswordRequired
                | CommerceError::ValidationError(_)
        )
    }

    /// The short message shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            CommerceError::IncompleteSelection(_) => {
                "Please select a model, date, and make sure the price is available.".to_string()
            }
            CommerceError::PaymentDeclined(_) | CommerceError::PaymentNotCompleted(_) => {
                "Payment failed. Please try again.".to_string()
            }
            CommerceError::Api(_) | CommerceError::Storage(_) => {
                "An error occurred. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
