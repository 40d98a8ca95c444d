//! DriveDesk CLI - storefront and admin console for the rental API.
//!
//! Commands:
//! - `drive catalog` / `drive vehicle <id>` - Browse vehicles
//! - `drive book` / `drive summary` / `drive pay` - Book and pay for a rental
//! - `drive login` / `drive register` / `drive logout` - Storefront account
//! - `drive admin-login` / `drive admin` - Manage users, vehicles, prices, features and bookings
//! - `drive config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod telemetry;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use drive_auth::AuthError;
use drive_commerce::CommerceError;

use commands::{
    AdminArgs, BookArgs, ConfigArgs, LoginArgs, PayArgs, RegisterArgs, VehicleArgs,
};

/// DriveDesk CLI - Browse, book and pay for rental vehicles
#[derive(Parser)]
#[command(name = "drive")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the vehicles for rent
    Catalog,

    /// Show one vehicle with its variants, prices and features
    Vehicle(VehicleArgs),

    /// Book a vehicle variant
    Book(BookArgs),

    /// Show the booking awaiting payment
    Summary,

    /// Pay for the current booking
    Pay(PayArgs),

    /// Sign in to the storefront
    Login(LoginArgs),

    /// Sign in to the admin dashboard
    AdminLogin(LoginArgs),

    /// Sign out and forget stored tokens
    Logout,

    /// Create a storefront account
    Register(RegisterArgs),

    /// Admin dashboard
    Admin(AdminArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init(cli.verbose, cli.json)?;

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog => commands::catalog::list(&ctx).await,
        Commands::Vehicle(args) => commands::catalog::show(args, &ctx).await,
        Commands::Book(args) => commands::book::run(args, &ctx).await,
        Commands::Summary => commands::book::summary(&ctx).await,
        Commands::Pay(args) => commands::pay::run(args, &ctx).await,
        Commands::Login(args) => commands::auth::login(args, &ctx).await,
        Commands::AdminLogin(args) => commands::auth::admin_login(args, &ctx).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Register(args) => commands::auth::register(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&describe(&e));
        std::process::exit(1);
    }

    Ok(())
}

/// Storefront errors carry their own user-facing wording.
fn describe(err: &anyhow::Error) -> String {
    if let Some(commerce) = err.downcast_ref::<CommerceError>() {
        return commerce.user_message();
    }
    if let Some(AuthError::InvalidRegistration(errors)) = err.downcast_ref::<AuthError>() {
        return format!("Please fix the highlighted fields: {}", errors);
    }
    format!("{:#}", err)
}
