//! Newsletter API client

use crate::models::newsletter::{Newsletter, CreateNewsletterRequest, UpdateNewsletterRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

#[derive(Clone)]
pub struct NewsletterApi {
    http: HttpClient,
}

impl NewsletterApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Newsletter>> {
        self.http
            .get_json::<Vec<Newsletter>>("/api/v1/newsletter")
            .await?
            .into_data()
    }

    pub async fn get(&self, id: &str) -> Result<Newsletter> {
        let path = format!("/api/v1/newsletter/{}", id);
        self.http
            .get_json::<Newsletter>(&path)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Newsletter", id))
    }

    pub async fn create(&self, request: &CreateNewsletterRequest) -> Result<Newsletter> {
        self.http
            .post_json::<_, Newsletter>("/api/v1/newsletter", request)
            .await?
            .into_data()
    }

    pub async fn update(&self, id: &str, request: &UpdateNewsletterRequest) -> Result<Newsletter> {
        let path = format!("/api/v1/newsletter/{}", id);
        self.http
            .put_json::<_, Newsletter>(&path, request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Newsletter", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/newsletter/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Newsletter", id))
    }
}
