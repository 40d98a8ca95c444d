//! Storefront domain types and flows for DriveDesk, a vehicle rental
//! storefront.
//!
//! This crate holds everything the storefront decides on its own, with the
//! rental API and the card processor behind traits:
//!
//! - **Catalog**: Vehicles, variant types, feature sets, prices
//! - **Booking**: Variant selection and the Book action state machine
//! - **Checkout**: Summary, payment amount, billing and card confirmation
//! - **Admin**: CRUD protocol over the dashboard collections
//!
//! # Example
//!
//! ```rust,ignore
//! use drive_commerce::prelude::*;
//!
//! let mut selector = VariantSelector::new(vehicle, Utc::now());
//! selector.select_variant(Some("t1".into()));
//!
//! let mut flow = BookingFlow::new(api, cache.clone());
//! match flow.submit(&selector).await? {
//!     BookingOutcome::Booked(context) => println!("Booked {}", context.booking_id),
//!     BookingOutcome::RedirectToLogin => println!("Please log in"),
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod admin;
pub mod api;
pub mod booking;
pub mod catalog;
pub mod checkout;
pub mod nav;
pub mod session;
pub mod summary;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_inr, Currency, Money};

    pub use crate::api::{ApiError, BookingApi, CatalogApi, PaymentIntentApi, PaymentProcessor};
    pub use crate::nav::Route;
    pub use crate::session::{SessionStore, SessionUser};

    // Catalog
    pub use crate::catalog::{
        BookingSelection, FeatureAttributes, FeatureSet, VariantSelector, VariantType, Vehicle,
        VehiclePrice, VehicleSummary,
    };

    // Booking
    pub use crate::booking::{
        BookingDraft, BookingFlow, BookingOutcome, BookingState, CheckoutContext, CreateBooking,
    };
    pub use crate::summary::{BookingSummary, SummaryView};

    // Checkout
    pub use crate::checkout::{
        Amount, BillingDetails, CardInput, CheckoutForm, ClientSecret, ConfirmOutcome,
        IntentStatus, PaymentIntentRequest, PaymentReceipt,
    };

    // Admin
    pub use crate::admin::{AdminConsole, AdminPolicy, AdminResource, PendingDelete};
}
