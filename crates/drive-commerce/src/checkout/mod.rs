//! Payment page: amount, billing details and the card confirmation.

mod amount;
mod billing;
mod form;
mod payment;

pub use amount::Amount;
pub use billing::BillingDetails;
pub use form::{CheckoutForm, PaymentReceipt};
pub use payment::{CardInput, ClientSecret, ConfirmOutcome, IntentStatus, PaymentIntentRequest};
