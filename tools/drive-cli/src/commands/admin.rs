//! Admin dashboard commands.
//!
//! Every collection supports the same four actions. Records are written as
//! JSON objects using the API's field names; `edit` starts from the current
//! record so only the changed fields need to be given.

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Confirm;
use drive_commerce::admin::{
    AdminConsole, AdminPolicy, AdminResource, BookingRecord, FeatureRecord, NewFeature, NewUser,
    PriceFields, PriceRecord, UserProfile, UserRecord, VehicleFields, VehicleRecord,
};
use drive_commerce::booking::CreateBooking;
use drive_commerce::catalog::{FeatureAttributes, Reference};
use drive_commerce::money::format_inr;
use drive_commerce::session::SessionStore;
use drive_gateway::{
    BookingsResource, FeaturesResource, PricesResource, UsersResource, VehiclesResource,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{AdminArgs, AdminCommand, AdminResourceArg};
use crate::context::Context;

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    if SessionStore::new(cache.clone()).admin_token()?.is_none() {
        bail!("Not signed in to the dashboard. Run: drive admin-login");
    }

    let gateway = ctx.gateway(cache)?;
    let policy = ctx.config.admin.policy();

    match args.resource {
        AdminResourceArg::Users(action) => {
            dispatch(gateway.admin_users(), action.command, &policy, ctx).await
        }
        AdminResourceArg::Vehicles(action) => {
            dispatch(gateway.admin_vehicles(), action.command, &policy, ctx).await
        }
        AdminResourceArg::Prices(action) => {
            dispatch(gateway.admin_prices(), action.command, &policy, ctx).await
        }
        AdminResourceArg::Features(action) => {
            dispatch(gateway.admin_features(), action.command, &policy, ctx).await
        }
        AdminResourceArg::Bookings(action) => {
            dispatch(gateway.admin_bookings(), action.command, &policy, ctx).await
        }
    }
}

/// How a collection is shown and edited from the command line.
trait Dashboard: AdminResource {
    const COLUMNS: &'static [(&'static str, usize)];

    fn id_of(record: &Self::Record) -> &Self::Id;

    fn row(record: &Self::Record) -> Vec<String>;

    /// Current values of the editable fields.
    fn editable(record: &Self::Record) -> Option<Self::Changes>;

    fn new_from(data: Value, password: Option<String>, policy: &AdminPolicy) -> Result<Self::New>;
}

async fn dispatch<R>(
    resource: R,
    command: AdminCommand,
    policy: &AdminPolicy,
    ctx: &Context,
) -> Result<()>
where
    R: Dashboard,
    R::Id: From<String> + PartialEq,
    R::Record: Serialize,
    R::Changes: Serialize + DeserializeOwned,
{
    let mut console = AdminConsole::new(resource);
    let name = console.resource().name();

    match command {
        AdminCommand::List => {
            console.refresh().await?;
            print_records::<R>(console.records(), ctx);
        }
        AdminCommand::Add { data, password } => {
            let new = R::new_from(read_data(&data, ctx)?, password, policy)?;
            let id = console.create(&new).await?;
            ctx.output.success(&format!("Created {} record {}", name, id));
        }
        AdminCommand::Edit { id, data } => {
            let id = <R::Id as From<String>>::from(id);
            console.refresh().await?;
            let record = console
                .records()
                .iter()
                .find(|r| R::id_of(r) == &id)
                .ok_or_else(|| anyhow!("No {} record with id {}", name, id))?;

            let current = match R::editable(record) {
                Some(fields) => serde_json::to_value(fields)?,
                None => Value::Object(Map::new()),
            };
            let merged = merge(current, read_data(&data, ctx)?);
            let changes: R::Changes = serde_json::from_value(merged)
                .with_context(|| format!("Invalid {} fields", name))?;

            console.update(&id, &changes).await?;
            ctx.output.success(&format!("Updated {} record {}", name, id));
        }
        AdminCommand::Delete { id, yes } => {
            let pending = console.request_delete(<R::Id as From<String>>::from(id));
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Delete {} record {}?", name, pending.id()))
                    .default(false)
                    .interact()?;

            if !confirmed {
                pending.cancel();
                ctx.output.info("Cancelled");
                return Ok(());
            }

            let id = pending.id().to_string();
            console.delete(pending.confirm()).await?;
            ctx.output.success(&format!("Deleted {} record {}", name, id));
        }
    }

    Ok(())
}

fn print_records<R>(records: &[R::Record], ctx: &Context)
where
    R: Dashboard,
    R::Record: Serialize,
{
    if ctx.output.is_json() {
        ctx.output.json(&records);
        return;
    }

    if records.is_empty() {
        ctx.output.info("No records");
        return;
    }

    let (headers, widths): (Vec<&str>, Vec<usize>) = R::COLUMNS.iter().copied().unzip();
    ctx.output.table_header(&headers, &widths);
    for record in records {
        let row = R::row(record);
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }
}

/// Inline JSON, or `@path` to a file holding it.
fn read_data(data: &str, ctx: &Context) -> Result<Value> {
    let text = match data.strip_prefix('@') {
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => data.to_string(),
    };
    parse_object(&text)
}

fn parse_object(text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text).context("Record data is not valid JSON")?;
    if !value.is_object() {
        bail!("Record data must be a JSON object");
    }
    Ok(value)
}

/// Overlay the top-level keys of `patch` onto `base`.
fn merge(base: Value, patch: Value) -> Value {
    match (base, patch) {
        (Value::Object(mut base), Value::Object(patch)) => {
            base.extend(patch);
            Value::Object(base)
        }
        (_, patch) => patch,
    }
}

fn decode<T: DeserializeOwned>(data: Value, name: &str) -> Result<T> {
    serde_json::from_value(data).with_context(|| format!("Invalid {} fields", name))
}

fn no_password(password: Option<String>) -> Result<()> {
    if password.is_some() {
        bail!("--password only applies to users");
    }
    Ok(())
}

fn reference_name(reference: &Option<Reference>) -> String {
    reference
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

impl Dashboard for UsersResource {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 14),
        ("NAME", 20),
        ("EMAIL", 26),
        ("PHONE", 12),
        ("CITY", 14),
    ];

    fn id_of(record: &UserRecord) -> &Self::Id {
        &record.id
    }

    fn row(record: &UserRecord) -> Vec<String> {
        let p = &record.profile;
        vec![
            record.id.to_string(),
            p.name.clone(),
            p.email.clone(),
            p.phone.clone(),
            p.city.clone(),
        ]
    }

    fn editable(record: &UserRecord) -> Option<UserProfile> {
        Some(record.profile.clone())
    }

    fn new_from(data: Value, password: Option<String>, policy: &AdminPolicy) -> Result<NewUser> {
        let profile: UserProfile = decode(data, "user")?;
        Ok(match password {
            Some(password) => NewUser::with_password(profile, password),
            None => NewUser::from_profile(profile, policy)?,
        })
    }
}

impl Dashboard for VehiclesResource {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 14),
        ("NAME", 22),
        ("MAKE", 24),
        ("STOCK", 6),
        ("VARIANTS", 8),
    ];

    fn id_of(record: &VehicleRecord) -> &Self::Id {
        &record.id
    }

    fn row(record: &VehicleRecord) -> Vec<String> {
        vec![
            record.id.to_string(),
            record.name.clone(),
            format!(
                "{} {}",
                reference_name(&record.manufacturer),
                reference_name(&record.model)
            ),
            record.available_quantity.to_string(),
            record.vehicle_types.len().to_string(),
        ]
    }

    fn editable(record: &VehicleRecord) -> Option<VehicleFields> {
        record.fields()
    }

    fn new_from(data: Value, password: Option<String>, _: &AdminPolicy) -> Result<VehicleFields> {
        no_password(password)?;
        decode(data, "vehicle")
    }
}

impl Dashboard for PricesResource {
    const COLUMNS: &'static [(&'static str, usize)] =
        &[("ID", 14), ("VEHICLE", 22), ("VARIANT", 16), ("PRICE", 14)];

    fn id_of(record: &PriceRecord) -> &Self::Id {
        &record.id
    }

    fn row(record: &PriceRecord) -> Vec<String> {
        vec![
            record.id.to_string(),
            reference_name(&record.vehicle),
            reference_name(&record.vehicle_type),
            format_inr(record.price),
        ]
    }

    fn editable(record: &PriceRecord) -> Option<PriceFields> {
        record.fields()
    }

    fn new_from(data: Value, password: Option<String>, _: &AdminPolicy) -> Result<PriceFields> {
        no_password(password)?;
        decode(data, "price")
    }
}

impl Dashboard for FeaturesResource {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 14),
        ("VARIANT", 16),
        ("ENGINE", 16),
        ("TRANSMISSION", 14),
        ("HP", 6),
    ];

    fn id_of(record: &FeatureRecord) -> &Self::Id {
        &record.id
    }

    fn row(record: &FeatureRecord) -> Vec<String> {
        let a = &record.attributes;
        vec![
            record.id.to_string(),
            reference_name(&record.vehicle_type),
            a.engine_type.clone().unwrap_or_else(|| "-".to_string()),
            a.transmission.clone().unwrap_or_else(|| "-".to_string()),
            a.horsepower.map_or_else(|| "-".to_string(), |hp| hp.to_string()),
        ]
    }

    fn editable(record: &FeatureRecord) -> Option<FeatureAttributes> {
        Some(record.attributes.clone())
    }

    fn new_from(data: Value, password: Option<String>, _: &AdminPolicy) -> Result<NewFeature> {
        no_password(password)?;
        decode(data, "feature")
    }
}

impl Dashboard for BookingsResource {
    const COLUMNS: &'static [(&'static str, usize)] = &[
        ("ID", 14),
        ("VEHICLE", 20),
        ("USER", 18),
        ("DATE", 12),
        ("TOTAL", 14),
    ];

    fn id_of(record: &BookingRecord) -> &Self::Id {
        &record.id
    }

    fn row(record: &BookingRecord) -> Vec<String> {
        vec![
            record.id.to_string(),
            reference_name(&record.vehicle),
            record.user_name.clone(),
            record.booking_date.chars().take(10).collect(),
            format_inr(record.total_price),
        ]
    }

    fn editable(record: &BookingRecord) -> Option<CreateBooking> {
        record.fields()
    }

    fn new_from(data: Value, password: Option<String>, _: &AdminPolicy) -> Result<CreateBooking> {
        no_password(password)?;
        decode(data, "booking")
    }
}
