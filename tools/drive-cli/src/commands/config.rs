//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let config = &ctx.config;
    ctx.output.header("Current Configuration");

    ctx.output.info("[api]");
    ctx.output.kv("graphql_url", &config.api.graphql_url);
    ctx.output.kv("storefront_origin", &config.api.storefront_origin);
    ctx.output.kv("payment_intent_url", &config.api.payment_intent_url());

    ctx.output.info("[payment]");
    ctx.output.kv("processor_url", &config.payment.processor_url);
    ctx.output.kv(
        "publishable_key",
        if config.payment.publishable_key.is_some() {
            "(set)"
        } else {
            "(not set)"
        },
    );

    ctx.output.info("[http]");
    ctx.output
        .kv("timeout_secs", &config.http.timeout_secs.to_string());
    ctx.output.kv(
        "connect_timeout_secs",
        &config.http.connect_timeout_secs.to_string(),
    );

    ctx.output.info("[storage]");
    ctx.output
        .kv("dir", &ctx.storage_dir().display().to_string());

    ctx.output.info("[admin]");
    ctx.output.kv(
        "placeholder_password",
        if config.admin.policy().placeholder_password().is_some() {
            "(set)"
        } else {
            "(disabled)"
        },
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("drive.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
