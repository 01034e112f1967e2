//! One-shot auth flow commands (signup, verify, login, logout, whoami).

use anyhow::{Context, Result};
use authtour_core::api::AuthClient;
use authtour_core::config::Config;
use authtour_core::flow::{MSG_LOGOUT_OK, MSG_SIGNUP_OK, MSG_VERIFY_OK};
use authtour_core::session;

/// Resolves the password: flag value if given, interactive prompt otherwise.
fn resolve_password(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ").context("read password"),
    }
}

pub async fn signup(config: &Config, email: &str, password: Option<String>) -> Result<()> {
    let password = resolve_password(password)?;
    let client = AuthClient::new(config);

    let ack = client.signup(email, &password).await?;
    // Demo backends echo the verification code in the ack message; it is
    // logged for debugging but never printed.
    if let Some(message) = ack.message {
        tracing::debug!(%message, "signup acknowledged");
    }

    println!("{MSG_SIGNUP_OK}");
    Ok(())
}

pub async fn verify(config: &Config, email: &str, code: &str) -> Result<()> {
    let client = AuthClient::new(config);
    client.verify_email(email, code).await?;

    println!("{MSG_VERIFY_OK}");
    Ok(())
}

pub async fn login(config: &Config, email: &str, password: Option<String>) -> Result<()> {
    let password = resolve_password(password)?;
    let client = AuthClient::new(config);

    let login = client.login(email, &password).await?;
    session::store_token(&login.access_token)?;

    println!("Logged in as {} (id: {})", login.user.email, login.user.id);
    Ok(())
}

pub fn logout() -> Result<()> {
    let had_token = session::clear_token()?;
    if had_token {
        println!("{MSG_LOGOUT_OK}");
    } else {
        println!("No session token stored");
    }
    Ok(())
}

pub async fn whoami(config: &Config) -> Result<()> {
    let Some(token) = session::load_token()? else {
        anyhow::bail!("Not logged in. Run `authtour login` first.");
    };

    let client = AuthClient::new(config);
    let dashboard = client.dashboard(&token).await?;

    println!("{}", dashboard.message);
    println!("Email:    {}", dashboard.user.email);
    println!("User ID:  {}", dashboard.user.id);
    println!(
        "Verified: {}",
        if dashboard.user.is_verified { "yes" } else { "no" }
    );
    println!("Created:  {}", dashboard.user.created_at);
    Ok(())
}
