//! Tender notice API client

use crate::models::tender::{Tender, CreateTenderRequest, UpdateTenderRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

#[derive(Clone)]
pub struct TenderApi {
    http: HttpClient,
}

impl TenderApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Tender>> {
        self.http.get_json::<Vec<Tender>>("/api/v1/tender").await?.into_data()
    }

    pub async fn create(&self, request: &CreateTenderRequest) -> Result<Tender> {
        self.http
            .post_json::<_, Tender>("/api/v1/tender", request)
            .await?
            .into_data()
    }

    pub async fn update(&self, id: &str, request: &UpdateTenderRequest) -> Result<Tender> {
        let path = format!("/api/v1/tender/{}", id);
        self.http
            .put_json::<_, Tender>(&path, request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Tender", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/tender/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Tender", id))
    }
}
