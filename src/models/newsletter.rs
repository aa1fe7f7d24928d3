//! Newsletter model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Newsletter {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "issueDate")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(rename = "documentUrl")]
    pub document_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNewsletterRequest {
    pub title: String,
    #[serde(rename = "issueDate")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(rename = "documentUrl")]
    pub document_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNewsletterRequest {
    pub title: Option<String>,
    #[serde(rename = "issueDate")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(rename = "documentUrl")]
    pub document_url: Option<String>,
}
