//! Login and logout commands

use crate::api::ApiClient;
use crate::utils::errors::Result;

use super::banner;

/// Handle the login command
pub async fn handle_login(client: &ApiClient, login_id: &str, password: &str) -> Result<()> {
    let response = client.login(login_id, password).await?;
    match response.name.as_deref() {
        Some(name) => banner(&format!("Signed in as {}", name)),
        None => banner("Signed in"),
    }
    if response.token.is_none() {
        // Legacy backend without JWT; identification falls back to X-USER
        println!("  (no token issued, using legacy identification)");
    }
    Ok(())
}

/// Handle the logout command
pub async fn handle_logout(client: &ApiClient) -> Result<()> {
    if client.logout()? {
        banner("Signed out");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}
