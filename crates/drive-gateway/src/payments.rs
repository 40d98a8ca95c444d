//! Payment intent endpoint and card processor clients.

use async_trait::async_trait;
use drive_commerce::api::{ApiError, PaymentIntentApi, PaymentProcessor};
use drive_commerce::checkout::{
    BillingDetails, CardInput, ClientSecret, ConfirmOutcome, IntentStatus, PaymentIntentRequest,
};
use drive_data::{FetchClient, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::api_error;

/// The storefront's own `create-payment-intent` route.
#[derive(Debug, Clone)]
pub struct HttpIntentEndpoint {
    fetch: FetchClient,
    url: String,
}

impl HttpIntentEndpoint {
    pub fn new(fetch: FetchClient, url: impl Into<String>) -> Self {
        Self {
            fetch,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// The endpoint answers with the bare secret string or an object wrapping it.
fn client_secret_from(response: &Response) -> Result<ClientSecret, ApiError> {
    let body: Value = response
        .json()
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let secret = match &body {
        Value::String(secret) => Some(secret.as_str()),
        Value::Object(map) => ["clientSecret", "client_secret"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str)),
        _ => None,
    };
    secret
        .filter(|s| !s.is_empty())
        .map(ClientSecret::new)
        .ok_or_else(|| ApiError::Decode("no client secret in payment intent response".into()))
}

#[async_trait]
impl PaymentIntentApi for HttpIntentEndpoint {
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<ClientSecret, ApiError> {
        debug!(amount = %request.amount, url = %self.url, "requesting payment intent");
        let response = self
            .fetch
            .post(self.url.as_str())
            .json(request)
            .map_err(api_error)?
            .send()
            .await
            .map_err(api_error)?;

        if !response.is_success() {
            let err = ApiError::Http {
                status: response.status,
                message: response.error_message(),
            };
            warn!(error = %err, "payment intent request failed");
            return Err(err);
        }
        client_secret_from(&response)
    }
}

/// Card confirmation against the processor's REST API, authorized with the
/// publishable key.
#[derive(Clone)]
pub struct HttpCardProcessor {
    fetch: FetchClient,
    base_url: String,
    publishable_key: String,
}

impl std::fmt::Debug for HttpCardProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCardProcessor")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ConfirmRequest<'a> {
    client_secret: &'a str,
    payment_method: &'a str,
    billing_details: BillingPayload<'a>,
}

#[derive(Serialize)]
struct BillingPayload<'a> {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    address: AddressPayload<'a>,
}

#[derive(Serialize)]
struct AddressPayload<'a> {
    line1: &'a str,
    city: &'a str,
    postal_code: &'a str,
    country: &'a str,
}

impl<'a> BillingPayload<'a> {
    fn new(billing: &'a BillingDetails) -> Self {
        Self {
            name: billing.full_name(),
            email: billing.email(),
            address: AddressPayload {
                line1: billing.address.trim(),
                city: billing.city.trim(),
                postal_code: billing.postal_code.trim(),
                country: billing.country.trim(),
            },
        }
    }
}

#[derive(Deserialize)]
struct ProcessorError {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
struct ConfirmResponse {
    #[serde(default)]
    error: Option<ProcessorError>,
    #[serde(default)]
    status: Option<IntentStatus>,
}

impl HttpCardProcessor {
    pub fn new(
        fetch: FetchClient,
        base_url: impl Into<String>,
        publishable_key: impl Into<String>,
    ) -> Self {
        Self {
            fetch,
            base_url: base_url.into(),
            publishable_key: publishable_key.into(),
        }
    }
}

#[async_trait]
impl PaymentProcessor for HttpCardProcessor {
    async fn confirm_card_payment(
        &self,
        secret: &ClientSecret,
        card: &CardInput,
        billing: &BillingDetails,
    ) -> Result<ConfirmOutcome, ApiError> {
        let intent_id = secret
            .intent_id()
            .ok_or_else(|| ApiError::Decode("malformed client secret".into()))?;
        let Some(payment_method) = card.payment_method() else {
            return Ok(ConfirmOutcome::Declined {
                message: "Your card details are incomplete.".into(),
                code: Some("incomplete_card".into()),
            });
        };

        let url = format!(
            "{}/v1/payment_intents/{}/confirm",
            self.base_url.trim_end_matches('/'),
            intent_id
        );
        let body = ConfirmRequest {
            client_secret: secret.as_str(),
            payment_method,
            billing_details: BillingPayload::new(billing),
        };
        let response = self
            .fetch
            .post(url)
            .bearer_auth(&self.publishable_key)
            .json(&body)
            .map_err(api_error)?
            .send()
            .await
            .map_err(api_error)?;

        // Declines come back with a 4xx status and an `error` object.
        let parsed: Result<ConfirmResponse, _> = response.json();
        match parsed {
            Ok(ConfirmResponse {
                error: Some(error), ..
            }) => {
                info!(intent = intent_id, code = ?error.code, "processor reported an error");
                Ok(ConfirmOutcome::Declined {
                    message: error.message,
                    code: error.code,
                })
            }
            Ok(ConfirmResponse {
                status: Some(status),
                ..
            }) if response.is_success() => {
                info!(intent = intent_id, %status, "payment intent confirmed");
                Ok(ConfirmOutcome::Settled { status })
            }
            _ if !response.is_success() => Err(ApiError::Http {
                status: response.status,
                message: response.error_message(),
            }),
            _ => Err(ApiError::Decode("unexpected confirmation response".into())),
        }
    }
}
