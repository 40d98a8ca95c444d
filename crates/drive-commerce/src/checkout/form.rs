use tracing::{info, warn};

use crate::api::{PaymentIntentApi, PaymentProcessor};
use crate::booking::CheckoutContext;
use crate::checkout::{
    Amount, BillingDetails, CardInput, ConfirmOutcome, IntentStatus, PaymentIntentRequest,
};
use crate::nav::{query_param, Route};
use crate::CommerceError;

/// Confirmation of a settled payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub amount: Amount,
    pub intent_id: Option<String>,
    pub status: IntentStatus,
}

impl PaymentReceipt {
    pub fn message(&self) -> &'static str {
        "Payment is successful"
    }

    /// Back to the catalog root.
    pub fn next(&self) -> Route {
        Route::Catalog
    }
}

/// The payment form.
///
/// The amount comes from the page's query string and is validated lazily:
/// the form can be filled with a bad amount, but [`CheckoutForm::pay`]
/// fails before any network call.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    raw_amount: String,
    amount: Option<Amount>,
    context: Option<CheckoutContext>,
    billing: BillingDetails,
    card: CardInput,
    processing: bool,
}

impl CheckoutForm {
    pub fn new(raw_amount: &str) -> Self {
        Self {
            raw_amount: raw_amount.to_string(),
            amount: Amount::parse(raw_amount).ok(),
            context: None,
            billing: BillingDetails::default(),
            card: CardInput::empty(),
            processing: false,
        }
    }

    /// Build from the payment page query, e.g. `?amount=1234.5`.
    pub fn from_query(query: &str) -> Self {
        Self::new(query_param(query, "amount").unwrap_or_default())
    }

    /// Cross-check the amount against the stored checkout.
    pub fn with_context(mut self, context: Option<CheckoutContext>) -> Self {
        self.context = context;
        self
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn billing(&self) -> &BillingDetails {
        &self.billing
    }

    pub fn set_billing(&mut self, billing: BillingDetails) {
        self.billing = billing;
    }

    pub fn set_card(&mut self, card: CardInput) {
        self.card = card;
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Whether the Pay button is enabled.
    pub fn can_pay(&self) -> bool {
        !self.processing
            && self.amount.is_some()
            && self.billing.is_complete()
            && self.card.is_complete()
    }

    fn validate(&self) -> Result<Amount, CommerceError> {
        let amount = self
            .amount
            .ok_or_else(|| CommerceError::InvalidAmount(self.raw_amount.clone()))?;

        if let Some(context) = &self.context {
            if (context.total() - amount.value()).abs() > f64::EPSILON {
                return Err(CommerceError::AmountMismatch {
                    expected: context.total(),
                    got: amount.value(),
                });
            }
        }

        let mut missing = self.billing.missing();
        if !self.card.is_complete() {
            missing.push("card");
        }
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }
        Ok(amount)
    }

    /// Create a payment intent and confirm the card against it.
    ///
    /// On any failure the processing flag is cleared so the form can be
    /// submitted again.
    pub async fn pay<I, P>(
        &mut self,
        intents: &I,
        processor: &P,
    ) -> Result<PaymentReceipt, CommerceError>
    where
        I: PaymentIntentApi + ?Sized,
        P: PaymentProcessor + ?Sized,
    {
        if self.processing {
            return Err(CommerceError::AlreadySubmitting);
        }
        let amount = self.validate()?;

        self.processing = true;
        let result = self.charge(amount, intents, processor).await;
        self.processing = false;
        result
    }

    async fn charge<I, P>(
        &self,
        amount: Amount,
        intents: &I,
        processor: &P,
    ) -> Result<PaymentReceipt, CommerceError>
    where
        I: PaymentIntentApi + ?Sized,
        P: PaymentProcessor + ?Sized,
    {
        let request = PaymentIntentRequest::new(amount, &self.billing);
        let secret = intents.create_payment_intent(&request).await?;

        match processor
            .confirm_card_payment(&secret, &self.card, &self.billing)
            .await?
        {
            ConfirmOutcome::Declined { message, code } => {
                warn!(%message, code = ?code, "card payment declined");
                Err(CommerceError::PaymentDeclined(message))
            }
            ConfirmOutcome::Settled {
                status: IntentStatus::Succeeded,
            } => {
                info!(%amount, intent = ?secret.intent_id(), "payment succeeded");
                Ok(PaymentReceipt {
                    amount,
                    intent_id: secret.intent_id().map(str::to_string),
                    status: IntentStatus::Succeeded,
                })
            }
            ConfirmOutcome::Settled { status } => {
                warn!(%status, "payment settled without success");
                Err(CommerceError::PaymentNotCompleted(status.to_string()))
            }
        }
    }
}
