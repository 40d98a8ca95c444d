//! Catalog and vehicle detail.

use anyhow::{Context as _, Result};
use drive_commerce::api::CatalogApi;
use drive_commerce::catalog::{NamedRef, Vehicle, VehicleSummary};
use drive_commerce::session::SessionStore;
use drive_commerce::{CommerceError, VehicleId};

use super::VehicleArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the catalog command.
pub async fn list(ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let gateway = ctx.gateway(cache.clone())?;

    if let Some(user) = SessionStore::new(cache).current_user()? {
        ctx.output.info(&format!("Welcome, {}", user.name));
    }

    let spinner = ctx.output.spinner("Loading vehicles...");
    let vehicles = gateway.vehicles().await;
    spinner.finish_and_clear();
    let vehicles = vehicles.context("Failed to load vehicles")?;

    if ctx.output.is_json() {
        ctx.output.json(&vehicles);
        return Ok(());
    }

    ctx.output.header("Vehicles for rent");
    if vehicles.is_empty() {
        ctx.output.info("No vehicles available");
        return Ok(());
    }

    let widths = [24, 28, 10, 16];
    ctx.output.table_header(&["NAME", "MAKE", "STOCK", "ID"], &widths);
    for vehicle in &vehicles {
        let make = summary_make(vehicle);
        ctx.output.table_row(
            &[
                &vehicle.name,
                &make,
                &vehicle.available_quantity.to_string(),
                vehicle.id.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

/// Run the vehicle command.
pub async fn show(args: VehicleArgs, ctx: &Context) -> Result<()> {
    let gateway = ctx.gateway(ctx.cache()?)?;
    let id = VehicleId::new(args.id);

    let vehicle = gateway
        .vehicle(&id)
        .await
        .context("Failed to load vehicle")?
        .ok_or_else(|| CommerceError::VehicleNotFound(id.to_string()))?;

    if ctx.output.is_json() {
        ctx.output.json(&vehicle);
        return Ok(());
    }

    print_vehicle(&vehicle, ctx);
    Ok(())
}

fn print_vehicle(vehicle: &Vehicle, ctx: &Context) {
    let out = &ctx.output;
    out.header(&vehicle.name);
    let make = vehicle.make_and_model();
    if !make.is_empty() {
        out.kv("Make", &make);
    }
    if !vehicle.description.is_empty() {
        out.kv("About", &vehicle.description);
    }
    out.kv("Stock", &availability(vehicle.available_quantity));

    let gallery = vehicle.gallery();
    if !gallery.is_empty() {
        out.header("Gallery");
        for url in gallery {
            out.list_item(url);
        }
    }

    out.header("Variants");
    if vehicle.vehicle_types.is_empty() {
        out.info("No variants listed");
    }
    for variant in &vehicle.vehicle_types {
        out.list_item(&format!(
            "{} ({}): {}",
            variant.name,
            variant.id,
            vehicle.price_label(&variant.id)
        ));
        for feature in vehicle.features_for(&variant.id) {
            for (label, value) in feature.attributes.display_rows() {
                out.kv(&format!("    {}", label), &value);
            }
        }
    }

    out.info("");
    out.info(&format!(
        "Book with: drive book {} --variant <name>",
        vehicle.id
    ));
}

fn summary_make(vehicle: &VehicleSummary) -> String {
    let parts: Vec<&str> = [vehicle.manufacturer.as_ref(), vehicle.model.as_ref()]
        .into_iter()
        .flatten()
        .map(|r: &NamedRef| r.name.as_str())
        .filter(|n| !n.is_empty())
        .collect();
    parts.join(" ")
}

fn availability(quantity: i32) -> String {
    if quantity > 0 {
        format!("{} {}", status_badge("available"), quantity)
    } else {
        status_badge("sold out")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{astra, context, StubTransport};
    use drive_commerce::session::SessionUser;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_fetches_catalog_with_user_token() {
        let transport = StubTransport::replying(vec![json!({
            "data": {"vehicles": [
                {"id": "V1", "name": "Astra", "availableQuantity": 3,
                 "manufacturer": {"name": "Opel"}, "model": {"name": "Astra K"}},
                {"id": "V2", "name": "Polo", "availableQuantity": 0}
            ]}
        })]);
        let (ctx, _storage) = context(&transport);
        let sessions = SessionStore::new(ctx.cache().unwrap());
        sessions.save_user(&SessionUser::new("U1", "Asha")).unwrap();
        sessions.save_auth_token("user-jwt").unwrap();

        list(&ctx).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://api.test/graphql");
        assert_eq!(
            sent[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer user-jwt")
        );
        let query = sent[0].json_body().unwrap()["query"].as_str().unwrap().to_string();
        assert!(query.contains("vehicles"));
    }

    #[tokio::test]
    async fn test_list_surfaces_api_errors() {
        let transport = StubTransport::replying(vec![json!({
            "data": null,
            "errors": [{"message": "Not authorized"}]
        })]);
        let (ctx, _storage) = context(&transport);

        let err = list(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("Failed to load vehicles"));
    }

    #[tokio::test]
    async fn test_show_decodes_vehicle() {
        let transport = StubTransport::replying(vec![json!({"data": {"vehicle": astra()}})]);
        let (ctx, _storage) = context(&transport);

        show(VehicleArgs { id: "V1".into() }, &ctx).await.unwrap();
        assert_eq!(transport.sent()[0].json_body().unwrap()["variables"]["id"], "V1");
    }

    #[tokio::test]
    async fn test_show_missing_vehicle_is_not_found() {
        let transport = StubTransport::replying(vec![json!({"data": {"vehicle": null}})]);
        let (ctx, _storage) = context(&transport);

        let err = show(VehicleArgs { id: "V404".into() }, &ctx).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommerceError>(),
            Some(CommerceError::VehicleNotFound(id)) if id == "V404"
        ));
    }

    #[test]
    fn test_summary_make_skips_missing_parts() {
        let vehicle: VehicleSummary =
            serde_json::from_value(json!({"id": "V2", "name": "Polo", "model": {"name": "Mk6"}}))
                .unwrap();
        assert_eq!(summary_make(&vehicle), "Mk6");
    }
}
