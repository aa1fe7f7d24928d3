//! Roadmap item model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub year: i32,
    pub month: u8,
    pub event: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoadmapRequest {
    pub year: i32,
    pub month: u8,
    pub event: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoadmapRequest {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub event: Option<String>,
}
