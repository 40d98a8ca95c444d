//! Payment for the current booking.

use anyhow::Result;
use drive_commerce::booking::CheckoutContext;
use drive_commerce::checkout::{BillingDetails, CardInput, CheckoutForm};
use serde_json::json;

use super::PayArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the pay command.
pub async fn run(args: PayArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let context = CheckoutContext::load(&cache)?;

    let raw_amount = match (&args.amount, &context) {
        (Some(raw), _) => raw.clone(),
        (None, Some(context)) => context.total().to_string(),
        (None, None) => {
            anyhow::bail!("No booking in progress. Pass --amount or book a vehicle first.")
        }
    };

    let mut form = CheckoutForm::new(&raw_amount).with_context(context);
    form.set_billing(billing_from(&args));
    form.set_card(match args.card_token {
        Some(token) => CardInput::tokenized(token),
        None => CardInput::empty(),
    });

    let intents = ctx.intent_endpoint()?;
    let processor = ctx.card_processor()?;

    let spinner = ctx.output.spinner("Processing payment...");
    let receipt = form.pay(&intents, &processor).await;
    spinner.finish_and_clear();
    let receipt = receipt?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "amount": receipt.amount,
            "intentId": receipt.intent_id,
            "status": receipt.status.as_str(),
        }));
        return Ok(());
    }

    ctx.output.success(receipt.message());
    ctx.output.kv("Amount", &receipt.amount.to_string());
    if let Some(id) = &receipt.intent_id {
        ctx.output.kv("Payment", id);
    }
    ctx.output.kv("Status", &status_badge(receipt.status.as_str()));
    ctx.output
        .info(&format!("Back to the catalog ({}): drive catalog", receipt.next()));
    Ok(())
}

fn billing_from(args: &PayArgs) -> BillingDetails {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    BillingDetails {
        first_name: field(&args.first_name),
        last_name: field(&args.last_name),
        email: args.email.clone().filter(|e| !e.trim().is_empty()),
        address: field(&args.address),
        city: field(&args.city),
        postal_code: field(&args.postal_code),
        country: field(&args.country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, StubTransport};
    use drive_commerce::CommerceError;

    fn args(amount: Option<&str>) -> PayArgs {
        PayArgs {
            amount: amount.map(str::to_string),
            first_name: Some("Asha".into()),
            last_name: Some("Rao".into()),
            email: Some("asha@example.com".into()),
            address: Some("12 MG Road".into()),
            city: Some("Pune".into()),
            postal_code: Some("411001".into()),
            country: Some("IN".into()),
            card_token: Some("pm_card_visa".into()),
        }
    }

    #[tokio::test]
    async fn test_pay_rejects_bad_amount_before_any_request() {
        let transport = StubTransport::default();
        let (ctx, _storage) = context(&transport);

        let err = run(args(Some("abc")), &ctx).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommerceError>(),
            Some(CommerceError::InvalidAmount(raw)) if raw == "abc"
        ));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_pay_without_booking_or_amount_fails() {
        let transport = StubTransport::default();
        let (ctx, _storage) = context(&transport);

        let err = run(args(None), &ctx).await.unwrap_err();
        assert!(err.to_string().contains("No booking in progress"));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_pay_incomplete_billing_sends_nothing() {
        let transport = StubTransport::default();
        let (ctx, _storage) = context(&transport);
        let args = PayArgs {
            city: None,
            ..args(Some("500000"))
        };

        let err = run(args, &ctx).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommerceError>(),
            Some(CommerceError::CheckoutIncomplete(_))
        ));
        assert!(transport.sent().is_empty());
    }
}
