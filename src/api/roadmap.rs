//! Roadmap API client

use crate::models::roadmap::{RoadmapItem, CreateRoadmapRequest, UpdateRoadmapRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

#[derive(Clone)]
pub struct RoadmapApi {
    http: HttpClient,
}

impl RoadmapApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<RoadmapItem>> {
        self.http
            .get_json::<Vec<RoadmapItem>>("/api/v1/roadmap")
            .await?
            .into_data()
    }

    pub async fn create(&self, request: &CreateRoadmapRequest) -> Result<RoadmapItem> {
        self.http
            .post_json::<_, RoadmapItem>("/api/v1/roadmap", request)
            .await?
            .into_data()
    }

    pub async fn update(&self, id: &str, request: &UpdateRoadmapRequest) -> Result<RoadmapItem> {
        let path = format!("/api/v1/roadmap/{}", id);
        self.http
            .put_json::<_, RoadmapItem>(&path, request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Roadmap item", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/roadmap/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Roadmap item", id))
    }
}
