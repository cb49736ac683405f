//! Home command
//!
//! The landing page equivalent: lab profile plus the most recent projects,
//! news and notices.

use crate::api::ApiClient;
use crate::models::NoticeCategory;
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;

/// Handle the home command
pub async fn handle_home(client: &ApiClient) -> Result<()> {
    let info = client.lab_info().await?;

    println!("{}", info.lab_name);
    if let Some(description) = &info.description {
        println!("{}", description);
    }
    if let Some(areas) = &info.research_areas {
        println!("research : {}", areas);
    }
    if let Some(location) = &info.location {
        println!("location : {}", location);
    }
    if let Some(email) = &info.contact_email {
        println!("contact  : {}", email);
    }
    if let Some(director) = &info.director {
        println!("director : {}", director.name);
    }

    let projects = client.list_projects(None, None).await?.into_items();
    if !projects.is_empty() {
        println!("\nRecent projects:");
        for project in projects.iter().take(3) {
            println!("  {:>4}  {}", project.id, truncate_text(&project.title, 48));
        }
    }

    let news = client
        .list_notices(NoticeCategory::News, None, None)
        .await?
        .into_items();
    if !news.is_empty() {
        println!("\nLaboratory news:");
        for item in news.iter().take(4) {
            println!("  {:>4}  {}", item.id, truncate_text(&item.title, 48));
        }
    }

    let notices = client
        .list_notices(NoticeCategory::Notice, None, None)
        .await?
        .into_items();
    if !notices.is_empty() {
        println!("\nNotices:");
        for item in notices.iter().take(4) {
            println!("  {:>4}  {}", item.id, truncate_text(&item.title, 48));
        }
    }
    Ok(())
}
