//! Registered users listing (demo-only endpoint).

use anyhow::Result;
use authtour_core::api::AuthClient;
use authtour_core::config::Config;
use comfy_table::Table;

pub async fn list(config: &Config) -> Result<()> {
    let client = AuthClient::new(config);
    let listing = client.list_users().await?;

    if listing.users.is_empty() {
        println!("No registered users.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(["ID", "Email", "Verified", "Created"]);
    for user in &listing.users {
        table.add_row([
            user.id.as_str(),
            user.email.as_str(),
            if user.is_verified { "yes" } else { "no" },
            user.created_at.as_str(),
        ]);
    }

    println!("{table}");
    println!("{} user(s)", listing.total);
    Ok(())
}
