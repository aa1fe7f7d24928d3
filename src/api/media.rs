//! Press and media coverage API client

use crate::models::media::{PressMediaItem, CreatePressMediaRequest, UpdatePressMediaRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

#[derive(Clone)]
pub struct MediaApi {
    http: HttpClient,
}

impl MediaApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<PressMediaItem>> {
        self.http
            .get_json::<Vec<PressMediaItem>>("/api/v1/media")
            .await?
            .into_data()
    }

    pub async fn create(&self, request: &CreatePressMediaRequest) -> Result<PressMediaItem> {
        self.http
            .post_json::<_, PressMediaItem>("/api/v1/media", request)
            .await?
            .into_data()
    }

    pub async fn update(&self, id: &str, request: &UpdatePressMediaRequest) -> Result<PressMediaItem> {
        let path = format!("/api/v1/media/{}", id);
        self.http
            .put_json::<_, PressMediaItem>(&path, request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Media item", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/media/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Media item", id))
    }
}
