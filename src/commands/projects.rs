//! Project commands

use std::path::PathBuf;

use crate::api::ApiClient;
use crate::content::attachments;
use crate::models::{ProjectRequest, ProjectStatus};
use crate::utils::errors::Result;
use crate::utils::helpers::{create_pagination_info, file_name_from_url, truncate_text};

use super::{banner, require_session};

/// Handle the project list command
pub async fn handle_list(client: &ApiClient, page: Option<i64>, size: Option<i64>) -> Result<()> {
    let listing = client.list_projects(page, size).await?;
    let page_info = listing.page_info();
    let items = listing.into_items();

    if items.is_empty() {
        println!("No projects.");
        return Ok(());
    }
    for project in &items {
        let status = project
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let summary = project.summary.as_deref().unwrap_or("");
        println!(
            "{:>4}  {:<32} {:<10} {}",
            project.id,
            truncate_text(&project.title, 32),
            status,
            truncate_text(summary, 40)
        );
    }
    if let Some((number, total_pages)) = page_info {
        println!("{}", create_pagination_info(number, total_pages, items.len()));
    }
    Ok(())
}

/// Handle the project show command: description is parsed for inline
/// attachments before rendering
pub async fn handle_show(client: &ApiClient, id: i64) -> Result<()> {
    let project = client.get_project(id).await?;
    let parsed = attachments::parse(&project.description);

    println!("{}", project.title);
    if let Some(summary) = &project.summary {
        println!("{}", summary);
    }
    if let Some(status) = project.status {
        println!("status  : {}", status);
    }
    if let Some(members) = &project.members {
        println!("members : {}", members);
    }
    if let Some(created_by) = &project.created_by {
        println!("author  : {}", created_by.name);
    }
    println!();
    if !parsed.text.is_empty() {
        println!("{}", parsed.text);
    }
    if !parsed.images.is_empty() {
        println!("\nImages:");
        for url in &parsed.images {
            println!("  {}", url);
        }
    }
    if !parsed.files.is_empty() {
        println!("\nFiles:");
        for url in &parsed.files {
            println!("  {} ({})", file_name_from_url(url), url);
        }
    }
    Ok(())
}

/// Handle the project create command.
///
/// Uploaded images and files become inline tokens ahead of the description
/// text, matching the new-project form's composition.
pub async fn handle_create(
    client: &ApiClient,
    title: String,
    summary: Option<String>,
    description: String,
    status: ProjectStatus,
    members: Option<String>,
    images: Vec<PathBuf>,
    files: Vec<PathBuf>,
) -> Result<()> {
    require_session(client)?;

    let mut image_urls = Vec::new();
    for path in images {
        image_urls.push(upload_path(client, &path).await?);
    }
    let mut body = attachments::compose(&image_urls, &description);
    for path in files {
        let url = upload_path(client, &path).await?;
        body = attachments::append_file(&body, &url);
    }

    let request = ProjectRequest { title, summary, description: body, status, members };
    let created = client.create_project(&request).await?;
    banner(&format!("Project created (id {})", created.id));

    handle_list(client, Some(0), Some(10)).await
}

/// Handle the project edit command.
///
/// `remove_images`/`remove_files` strip the matching inline tokens from the
/// stored description before saving; image removal escapes the URL so regex
/// metacharacters cannot corrupt other tokens.
#[allow(clippy::too_many_arguments)]
pub async fn handle_edit(
    client: &ApiClient,
    id: i64,
    title: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    status: Option<ProjectStatus>,
    members: Option<String>,
    remove_images: Vec<String>,
    remove_files: Vec<String>,
) -> Result<()> {
    require_session(client)?;

    let current = client.get_project(id).await?;

    // Start from the stored description, or replace the free text while
    // keeping existing image tokens, the way the edit form does.
    let mut body = match description {
        Some(text) => {
            let parsed = attachments::parse(&current.description);
            attachments::compose(&parsed.images, &text)
        }
        None => current.description.clone(),
    };
    for url in &remove_images {
        body = attachments::remove_image(&body, url)?;
    }
    for url in &remove_files {
        body = attachments::remove_file(&body, url);
    }
    body = attachments::collapse(&body);

    let request = ProjectRequest {
        title: title.unwrap_or(current.title),
        summary: summary.or(current.summary),
        description: body,
        status: status.or(current.status).unwrap_or(ProjectStatus::Planning),
        members: members.or(current.members),
    };
    client.update_project(id, &request).await?;
    banner("Project saved");

    handle_show(client, id).await
}

/// Handle the project delete command
pub async fn handle_delete(client: &ApiClient, id: i64) -> Result<()> {
    require_session(client)?;
    client.delete_project(id).await?;
    banner("Project deleted");

    handle_list(client, Some(0), Some(10)).await
}

async fn upload_path(client: &ApiClient, path: &PathBuf) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    Ok(client.upload(&name, bytes).await?.url)
}
