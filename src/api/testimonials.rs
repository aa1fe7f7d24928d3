//! Testimonial message API client

use serde::Serialize;
use crate::models::common::OrderUpdate;
use crate::models::testimonial::{TestimonialMessage, CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::utils::errors::Result;
use super::http::HttpClient;

/// Body of `POST /api/v1/message/reorder`
#[derive(Debug, Serialize)]
struct MessageReorderRequest<'a> {
    messages: &'a [OrderUpdate],
}

#[derive(Clone)]
pub struct TestimonialApi {
    http: HttpClient,
}

impl TestimonialApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<TestimonialMessage>> {
        self.http
            .get_json::<Vec<TestimonialMessage>>("/api/v1/message")
            .await?
            .into_data()
    }

    pub async fn create(&self, request: &CreateTestimonialRequest) -> Result<TestimonialMessage> {
        self.http
            .post_json::<_, TestimonialMessage>("/api/v1/message", request)
            .await?
            .into_data()
    }

    pub async fn update(&self, id: &str, request: &UpdateTestimonialRequest) -> Result<TestimonialMessage> {
        let path = format!("/api/v1/message/{}", id);
        self.http
            .put_json::<_, TestimonialMessage>(&path, request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Testimonial", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/message/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Testimonial", id))
    }

    /// Persist a new display order in a single call
    pub async fn reorder(&self, updates: &[OrderUpdate]) -> Result<()> {
        let request = MessageReorderRequest { messages: updates };
        self.http
            .post_json::<_, serde_json::Value>("/api/v1/message/reorder", &request)
            .await?
            .into_ok()
    }
}
