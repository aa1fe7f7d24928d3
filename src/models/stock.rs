//! Stock inventory model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStockRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub count: i64,
}

/// Body of `POST /api/v1/update-stock`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStockRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub count: i64,
}
