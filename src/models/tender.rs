//! Tender notice model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tender {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub reference: Option<String>,
    #[serde(rename = "opensAt")]
    pub opens_at: Option<DateTime<Utc>>,
    #[serde(rename = "closesAt")]
    pub closes_at: Option<DateTime<Utc>>,
    #[serde(rename = "documentUrl")]
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenderRequest {
    pub title: String,
    pub reference: Option<String>,
    #[serde(rename = "opensAt")]
    pub opens_at: Option<DateTime<Utc>>,
    #[serde(rename = "closesAt")]
    pub closes_at: Option<DateTime<Utc>>,
    #[serde(rename = "documentUrl")]
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTenderRequest {
    pub title: Option<String>,
    pub reference: Option<String>,
    #[serde(rename = "opensAt")]
    pub opens_at: Option<DateTime<Utc>>,
    #[serde(rename = "closesAt")]
    pub closes_at: Option<DateTime<Utc>>,
    #[serde(rename = "documentUrl")]
    pub document_url: Option<String>,
}
