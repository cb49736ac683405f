//! Notice, lab-news and resource commands
//!
//! One command family serves all three content sections; the category tag
//! selects which one.

use std::path::PathBuf;

use crate::api::ApiClient;
use crate::content::attachments;
use crate::models::{CreateNoticeRequest, NoticeCategory, UpdateNoticeRequest};
use crate::utils::errors::Result;
use crate::utils::helpers::{
    create_pagination_info, file_name_from_url, format_timestamp, truncate_text,
};

use super::{banner, require_session};

/// Handle the list command
pub async fn handle_list(
    client: &ApiClient,
    category: NoticeCategory,
    page: Option<i64>,
    size: Option<i64>,
) -> Result<()> {
    let listing = client.list_notices(category, page, size).await?;
    let page_info = listing.page_info();
    let items = listing.into_items();

    if items.is_empty() {
        println!("No entries.");
        return Ok(());
    }

    for item in &items {
        let pin = if item.pinned { "📌 " } else { "" };
        let author = item.author.as_ref().map(|a| a.name.as_str()).unwrap_or("-");
        println!(
            "{:>4}  {}{:<40} {} · {}",
            item.id,
            pin,
            truncate_text(&item.title, 40),
            format_timestamp(item.created_at),
            author
        );
    }
    if let Some((number, total_pages)) = page_info {
        println!("{}", create_pagination_info(number, total_pages, items.len()));
    }
    Ok(())
}

/// Handle the show command: renders the cleaned text plus the inline
/// attachments extracted from the content blob
pub async fn handle_show(client: &ApiClient, id: i64) -> Result<()> {
    let notice = client.get_notice(id).await?;
    let parsed = attachments::parse(&notice.content);

    println!("{}{}", if notice.pinned { "📌 " } else { "" }, notice.title);
    if let Some(author) = &notice.author {
        println!("{} · {}", format_timestamp(notice.created_at), author.name);
    } else {
        println!("{}", format_timestamp(notice.created_at));
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
    if !parsed.files.is_empty() || !notice.attachments.is_empty() {
        println!("\nFiles:");
        for url in &parsed.files {
            println!("  {} ({})", file_name_from_url(url), url);
        }
        for attachment in &notice.attachments {
            let name = attachment.original_name.as_deref().unwrap_or("-");
            match &attachment.file_key {
                Some(key) => println!("  {} (fileKey={})", name, key),
                None => println!("  {}", name),
            }
        }
    }
    Ok(())
}

/// Handle the create command.
///
/// Uploaded images and files are appended to the content as inline tokens
/// before the record is created, mirroring the new-entry forms.
pub async fn handle_create(
    client: &ApiClient,
    category: NoticeCategory,
    title: String,
    content: String,
    images: Vec<PathBuf>,
    files: Vec<PathBuf>,
) -> Result<()> {
    require_session(client)?;

    let mut body = content;
    for path in images {
        let url = upload_path(client, &path).await?;
        body = attachments::append_image(&body, &url);
    }
    for path in files {
        let url = upload_path(client, &path).await?;
        body = attachments::append_file(&body, &url);
    }

    let request = CreateNoticeRequest { title, content: body, category };
    let created = client.create_notice(&request).await?;
    banner(&format!("Created (id {})", created.id));

    handle_list(client, category, Some(0), Some(10)).await
}

/// Handle the edit command
pub async fn handle_edit(client: &ApiClient, id: i64, title: String, content: String) -> Result<()> {
    require_session(client)?;
    let request = UpdateNoticeRequest { title, content };
    client.update_notice(id, &request).await?;
    banner("Saved");

    handle_show(client, id).await
}

/// Handle the delete command
pub async fn handle_delete(
    client: &ApiClient,
    category: NoticeCategory,
    id: i64,
) -> Result<()> {
    require_session(client)?;
    client.delete_notice(id).await?;
    banner("Deleted");

    handle_list(client, category, Some(0), Some(10)).await
}

/// Handle the pin toggle command
pub async fn handle_pin(client: &ApiClient, id: i64, pinned: bool) -> Result<()> {
    require_session(client)?;
    client.set_notice_pinned(id, pinned).await?;
    banner(if pinned { "Pinned" } else { "Unpinned" });

    handle_show(client, id).await
}

/// Handle the attach command: sends text fields and new attachment files in
/// one multipart form
pub async fn handle_attach(client: &ApiClient, id: i64, files: Vec<PathBuf>) -> Result<()> {
    require_session(client)?;

    let notice = client.get_notice(id).await?;
    let mut parts = Vec::new();
    for path in files {
        let bytes = tokio::fs::read(&path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        parts.push((name, bytes));
    }
    client
        .update_notice_form(id, &notice.title, &notice.content, parts)
        .await?;
    banner("Attachments uploaded");

    handle_show(client, id).await
}

async fn upload_path(client: &ApiClient, path: &PathBuf) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    Ok(client.upload(&name, bytes).await?.url)
}
