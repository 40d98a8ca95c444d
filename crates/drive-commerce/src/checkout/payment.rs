use serde::{Deserialize, Serialize};
use std::fmt;

use crate::checkout::{Amount, BillingDetails};

/// Body posted to the storefront's payment-intent endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    pub amount: Amount,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl PaymentIntentRequest {
    pub fn new(amount: Amount, billing: &BillingDetails) -> Self {
        Self {
            amount,
            first_name: billing.first_name.trim().to_string(),
            last_name: billing.last_name.trim().to_string(),
            email: billing.email().map(str::to_string),
            address: billing.address.trim().to_string(),
            city: billing.city.trim().to_string(),
            postal_code: billing.postal_code.trim().to_string(),
            country: billing.country.trim().to_string(),
        }
    }
}

/// Secret used to confirm a payment intent, `pi_<id>_secret_<nonce>`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The payment intent id (`pi_<id>`), if the secret is well formed.
    pub fn intent_id(&self) -> Option<&str> {
        self.0
            .split_once("_secret_")
            .map(|(id, _)| id)
            .filter(|id| id.starts_with("pi_") && id.len() > 3)
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.intent_id() {
            Some(id) => write!(f, "ClientSecret({}_secret_***)", id),
            None => f.write_str("ClientSecret(***)"),
        }
    }
}

/// Card entry widget state. The card itself never reaches this crate, only
/// the payment method token the widget produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardInput {
    payment_method: Option<String>,
}

impl CardInput {
    /// No card entered yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tokenized(payment_method: impl Into<String>) -> Self {
        let payment_method = payment_method.into();
        Self {
            payment_method: Some(payment_method).filter(|pm| !pm.trim().is_empty()),
        }
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.payment_method.is_some()
    }
}

/// Payment intent status as reported by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    Succeeded,
    Processing,
    RequiresAction,
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresCapture,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl IntentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentStatus::Succeeded => "succeeded",
            IntentStatus::Processing => "processing",
            IntentStatus::RequiresAction => "requires_action",
            IntentStatus::RequiresPaymentMethod => "requires_payment_method",
            IntentStatus::RequiresConfirmation => "requires_confirmation",
            IntentStatus::RequiresCapture => "requires_capture",
            IntentStatus::Canceled => "canceled",
            IntentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a card confirmation the processor answered.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// The processor reported an error (declined card, bad CVC, ...).
    Declined {
        message: String,
        code: Option<String>,
    },
    /// No error; the intent moved to `status`.
    Settled { status: IntentStatus },
}
