//! Lab information model

use serde::{Deserialize, Serialize};

/// Director reference embedded in the lab profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Public lab profile as served by `/lab-info`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabInfo {
    pub id: i64,
    pub lab_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub research_areas: Option<String>,
    #[serde(default)]
    pub facilities: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub director: Option<DirectorRef>,
}
