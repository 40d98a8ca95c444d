//! CLI command implementations.

pub mod admin;
pub mod auth;
pub mod book;
pub mod catalog;
pub mod config;
pub mod pay;

use clap::{Args, Subcommand};

/// Arguments for the vehicle command.
#[derive(Args)]
pub struct VehicleArgs {
    /// Vehicle id.
    pub id: String,
}

/// Arguments for the book command.
#[derive(Args)]
pub struct BookArgs {
    /// Vehicle id.
    pub vehicle: String,

    /// Variant type, by id or name.
    #[arg(short = 't', long)]
    pub variant: String,

    /// Booking date (YYYY-MM-DD, default: today).
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the pay command.
#[derive(Args)]
pub struct PayArgs {
    /// Amount to charge (default: the current booking's total).
    #[arg(short, long)]
    pub amount: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Tokenized card (payment method id) from the processor.
    #[arg(long)]
    pub card_token: Option<String>,
}

/// Arguments for the login and admin-login commands.
#[derive(Args)]
pub struct LoginArgs {
    /// Email (prompted when omitted).
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (prompted when omitted).
    #[arg(long, env = "DRIVE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for the register command. Missing fields are prompted.
#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// 10-digit phone number.
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// 6-digit pincode.
    #[arg(long)]
    pub pincode: Option<String>,

    /// Password (prompted with confirmation when omitted).
    #[arg(long, env = "DRIVE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub resource: AdminResourceArg,
}

#[derive(Subcommand)]
pub enum AdminResourceArg {
    /// Storefront user accounts
    Users(AdminAction),
    /// Vehicles
    Vehicles(AdminAction),
    /// Per-variant prices
    Prices(AdminAction),
    /// Feature sets
    Features(AdminAction),
    /// Bookings
    Bookings(AdminAction),
}

#[derive(Args)]
pub struct AdminAction {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List every record
    List,

    /// Create a record from JSON fields
    Add {
        /// JSON object, or @path to a file holding one.
        #[arg(short, long)]
        data: String,

        /// Password for a new user (default: the configured placeholder).
        #[arg(long)]
        password: Option<String>,
    },

    /// Edit a record. Fields not given keep their current value.
    Edit {
        /// Record id.
        id: String,

        /// JSON object, or @path to a file holding one.
        #[arg(short, long)]
        data: String,
    },

    /// Delete a record
    Delete {
        /// Record id.
        id: String,

        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a default drive.toml
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
