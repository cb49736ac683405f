//! Profile commands (the My Page equivalent)

use crate::api::ApiClient;
use crate::models::UpdateProfileRequest;
use crate::utils::errors::Result;

use super::{banner, require_session};

/// Handle the profile show command
pub async fn handle_show(client: &ApiClient) -> Result<()> {
    require_session(client)?;
    let me = client.me().await?;

    println!("{} ({})", me.name, me.role);
    if let Some(login_id) = &me.login_id {
        println!("  login id : {}", login_id);
    }
    if let Some(email) = &me.email {
        println!("  email    : {}", email);
    }
    if let Some(phone) = &me.phone {
        println!("  phone    : {}", phone);
    }
    if let Some(degree) = &me.degree {
        println!("  degree   : {}", degree);
    }
    if let Some(photo_url) = &me.photo_url {
        println!("  photo    : {}", photo_url);
    }
    if me.admin {
        println!("  admin    : yes");
    }
    Ok(())
}

/// Handle the profile update command; unset fields are left unchanged
pub async fn handle_update(
    client: &ApiClient,
    email: Option<String>,
    phone: Option<String>,
    degree: Option<String>,
    photo: Option<std::path::PathBuf>,
) -> Result<()> {
    require_session(client)?;

    // Photo goes through the upload endpoint first, then its URL is saved
    let photo_url = match photo {
        Some(path) => {
            let bytes = tokio::fs::read(&path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "photo".to_string());
            Some(client.upload(&file_name, bytes).await?.url)
        }
        None => None,
    };

    let request = UpdateProfileRequest { email, phone, degree, photo_url };
    client.update_profile(&request).await?;
    banner("Profile saved");

    // Reload to show the persisted state
    handle_show(client).await
}

/// Handle the password change command
pub async fn handle_password(client: &ApiClient, old: &str, new: &str) -> Result<()> {
    require_session(client)?;
    client.change_password(old, new).await?;
    banner("Password changed");
    Ok(())
}
