//! Sign-in, sign-up and sign-out.

use anyhow::{Context as _, Result};
use dialoguer::{Input, Password};
use drive_auth::{AuthError, Authenticator, Credentials, RegistrationForm};
use serde_json::json;

use super::{LoginArgs, RegisterArgs};
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let auth = Authenticator::new(ctx.gateway(cache.clone())?, cache);
    let credentials = credentials(args)?;

    let spinner = ctx.output.spinner("Signing in...");
    let result = auth.login(&credentials).await;
    spinner.finish_and_clear();
    let (user, next) = result?;

    if ctx.output.is_json() {
        ctx.output.json(&user);
        return Ok(());
    }
    ctx.output.success(&format!("Welcome, {}", user.name));
    ctx.output.debug(&format!("Next: {}", next));
    Ok(())
}

/// Run the admin-login command.
pub async fn admin_login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let auth = Authenticator::new(ctx.gateway(cache.clone())?, cache);
    let credentials = credentials(args)?;

    let spinner = ctx.output.spinner("Signing in to the dashboard...");
    let result = auth.admin_login(&credentials).await;
    spinner.finish_and_clear();
    let (admin, next) = result?;

    if ctx.output.is_json() {
        ctx.output.json(&admin);
        return Ok(());
    }
    ctx.output.success(&format!("Signed in as admin {}", admin.email));
    ctx.output.debug(&format!("Next: {}", next));
    Ok(())
}

/// Run the logout command.
pub async fn logout(ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let auth = Authenticator::new(ctx.gateway(cache.clone())?, cache);
    auth.logout()?;
    ctx.output.success("Signed out");
    Ok(())
}

/// Run the register command.
pub async fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let auth = Authenticator::new(ctx.gateway(cache.clone())?, cache);
    let form = registration_form(args)?;

    let spinner = ctx.output.spinner("Creating account...");
    let result = auth.register(&form).await;
    spinner.finish_and_clear();

    let (user, next) = match result {
        Ok(done) => done,
        Err(AuthError::InvalidRegistration(errors)) => {
            for (field, message) in errors.iter() {
                ctx.output.list_item(&format!("{}: {}", field, message));
            }
            return Err(AuthError::InvalidRegistration(errors).into());
        }
        Err(e) => return Err(e.into()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": user.id, "name": user.name, "email": user.email }));
        return Ok(());
    }
    ctx.output
        .success(&format!("Account created for {}. Sign in with: drive login", user.email));
    ctx.output.debug(&format!("Next: {}", next));
    Ok(())
}

fn credentials(args: LoginArgs) -> Result<Credentials> {
    let email = match args.email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };
    Ok(Credentials::new(email, password))
}

fn registration_form(args: RegisterArgs) -> Result<RegistrationForm> {
    let or_prompt = |value: Option<String>, label: &str| match value {
        Some(value) => Ok(value),
        None => prompt(label),
    };

    let name = or_prompt(args.name, "Name")?;
    let email = or_prompt(args.email, "Email")?;
    let phone = or_prompt(args.phone, "Phone")?;
    let city = or_prompt(args.city, "City")?;
    let state = or_prompt(args.state, "State")?;
    let country = or_prompt(args.country, "Country")?;
    let pincode = or_prompt(args.pincode, "Pincode")?;

    let (password, confirm_password) = match args.password {
        Some(password) => (password.clone(), password),
        None => (
            Password::new()
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact()
                .context("Failed to read password")?,
            Password::new()
                .with_prompt("Confirm password")
                .allow_empty_password(true)
                .interact()
                .context("Failed to read password")?,
        ),
    };

    Ok(RegistrationForm {
        name,
        email,
        phone,
        city,
        state,
        country,
        pincode,
        password,
        confirm_password,
    })
}

fn prompt(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", label.to_lowercase()))
}
