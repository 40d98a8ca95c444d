//! Booking and booking summary.

use anyhow::{Context as _, Result};
use chrono::{NaiveDate, Utc};
use drive_commerce::api::CatalogApi;
use drive_commerce::booking::{BookingFlow, BookingOutcome};
use drive_commerce::catalog::VariantSelector;
use drive_commerce::summary::{BookingSummary, SummaryView};
use drive_commerce::{CommerceError, VehicleId};

use super::BookArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the book command.
pub async fn run(args: BookArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let gateway = ctx.gateway(cache.clone())?;
    let id = VehicleId::new(args.vehicle);

    let vehicle = gateway
        .vehicle(&id)
        .await
        .context("Failed to load vehicle")?
        .ok_or_else(|| CommerceError::VehicleNotFound(id.to_string()))?;

    let now = Utc::now();
    let mut selector = VariantSelector::new(vehicle, now);
    match selector.select_variant_named(&args.variant)? {
        Some(price) => ctx.output.debug(&format!("Variant price: {}", price)),
        None => ctx.output.warn("No price is listed for this variant"),
    }

    if let Some(raw) = args.date.as_deref() {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))?;
        selector.select_date(date.and_time(now.time()).and_utc(), now)?;
    }

    let mut flow = BookingFlow::new(gateway, cache);
    let spinner = ctx.output.spinner("Booking...");
    let outcome = flow.submit(&selector).await;
    spinner.finish_and_clear();

    match outcome? {
        BookingOutcome::Booked(context) => {
            if ctx.output.is_json() {
                ctx.output.json(&context);
                return Ok(());
            }
            ctx.output.success(&format!(
                "{} booking {}",
                status_badge("booked"),
                context.booking_id
            ));
            ctx.output.info("Review it with: drive summary");
        }
        outcome @ BookingOutcome::RedirectToLogin => {
            ctx.output.warn(&format!(
                "Sign in to book this vehicle ({}): drive login",
                outcome.route()
            ));
        }
    }

    Ok(())
}

/// Run the summary command.
pub async fn summary(ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;

    let summary = match BookingSummary::load(&cache)? {
        SummaryView::Ready(summary) => summary,
        SummaryView::Loading => {
            ctx.output.info("No booking in progress");
            return Ok(());
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(summary.context());
        return Ok(());
    }

    ctx.output.header("Booking summary");
    for (label, value) in summary.lines() {
        ctx.output.kv(label, &value);
    }
    for feature in &summary.context().draft.features {
        for (label, value) in feature.attributes.display_rows() {
            ctx.output.kv(&format!("    {}", label), &value);
        }
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Proceed to payment ({}): drive pay",
        summary.proceed_to_payment()
    ));
    Ok(())
}
