//! Member listing and administration commands

use crate::api::ApiClient;
use crate::models::{CreateMemberRequest, Member, Role, UpdateMemberRequest};
use crate::utils::errors::Result;

use super::{banner, require_session};

fn print_member_row(member: &Member) {
    let degree = member.degree.as_deref().unwrap_or("-");
    let admin = if member.admin { " [admin]" } else { "" };
    match member.graduation_year {
        Some(year) => println!(
            "{:>4}  {:<12} {:<10} {:<8} graduated {}{}",
            member.id, member.name, member.role, degree, year, admin
        ),
        None => println!(
            "{:>4}  {:<12} {:<10} {:<8}{}",
            member.id, member.name, member.role, degree, admin
        ),
    }
}

/// Handle the member list command; `alumni` switches between the current
/// and alumni sections
pub async fn handle_list(client: &ApiClient, alumni: bool) -> Result<()> {
    let members = client.list_members().await?;
    let section: Vec<_> = members
        .iter()
        .filter(|m| {
            if alumni {
                m.role == Role::Alumni
            } else {
                matches!(m.role, Role::Professor | Role::LabLead | Role::Member)
            }
        })
        .collect();

    if section.is_empty() {
        println!("No members.");
        return Ok(());
    }
    for member in section {
        print_member_row(member);
    }
    Ok(())
}

/// Handle the member add command (admin)
pub async fn handle_add(
    client: &ApiClient,
    name: String,
    login_id: String,
    password: String,
    role: Role,
    admin: bool,
    degree: Option<String>,
) -> Result<()> {
    require_session(client)?;
    let request = CreateMemberRequest { name, login_id, password, role, admin, degree };
    let created = client.create_member(&request).await?;
    banner(&format!("Member added: {} (id {})", created.name, created.id));

    handle_list(client, role == Role::Alumni).await
}

/// Handle the member edit command (admin)
pub async fn handle_edit(
    client: &ApiClient,
    id: i64,
    name: Option<String>,
    role: Option<Role>,
    admin: Option<bool>,
    degree: Option<String>,
    graduation_year: Option<i32>,
) -> Result<()> {
    require_session(client)?;
    let request = UpdateMemberRequest { name, role, admin, degree, graduation_year };
    client.update_member(id, &request).await?;
    banner("Member updated");

    handle_list(client, false).await
}

/// Handle the member password reset command (admin)
pub async fn handle_set_password(client: &ApiClient, id: i64, new_password: &str) -> Result<()> {
    require_session(client)?;
    client.reset_member_password(id, new_password).await?;
    banner("Password reset");
    Ok(())
}

/// Handle the member remove command (admin)
pub async fn handle_remove(client: &ApiClient, id: i64) -> Result<()> {
    require_session(client)?;
    client.delete_member(id).await?;
    banner("Member removed");

    handle_list(client, false).await
}

/// Handle the save-order command (admin).
///
/// The full ordered id list is sent in one request, exactly as the manage
/// page does after its in-memory reorder.
pub async fn handle_save_order(client: &ApiClient, ordered_ids: Vec<i64>) -> Result<()> {
    require_session(client)?;
    if ordered_ids.is_empty() {
        println!("Nothing to save.");
        return Ok(());
    }
    client.save_member_order(&ordered_ids).await?;
    banner("Display order saved");

    handle_list(client, false).await
}
