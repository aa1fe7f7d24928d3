//! Carousel image API client

use std::path::Path;
use reqwest::multipart::Form;
use serde::Serialize;
use crate::models::common::OrderUpdate;
use crate::models::carousel::{CarouselImage, CreateCarouselImageRequest, UpdateCarouselImageRequest};
use crate::utils::errors::Result;
use super::http::{HttpClient, file_part};

/// Body of `POST /api/v1/carousel-images/reorder`
#[derive(Debug, Serialize)]
struct CarouselReorderRequest<'a> {
    images: &'a [OrderUpdate],
}

#[derive(Clone)]
pub struct CarouselApi {
    http: HttpClient,
}

impl CarouselApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<CarouselImage>> {
        self.http
            .get_json::<Vec<CarouselImage>>("/api/v1/carousel-images")
            .await?
            .into_data()
    }

    /// Upload a new carousel image (multipart: caption/order fields + file)
    pub async fn create(
        &self,
        request: &CreateCarouselImageRequest,
        image: &Path,
    ) -> Result<CarouselImage> {
        let mut form = Form::new().text("order", request.order.to_string());
        if let Some(caption) = &request.caption {
            form = form.text("caption", caption.clone());
        }
        let part = file_part(image).await?;
        form = form.part("image", part);

        self.http
            .post_multipart::<CarouselImage>("/api/v1/carousel-images", form)
            .await?
            .into_data()
    }

    pub async fn update(&self, id: &str, request: &UpdateCarouselImageRequest) -> Result<CarouselImage> {
        let path = format!("/api/v1/carousel-images/{}", id);
        self.http
            .put_json::<_, CarouselImage>(&path, request)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Carousel image", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/carousel-images/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Carousel image", id))
    }

    /// Persist a new display order in a single call
    pub async fn reorder(&self, updates: &[OrderUpdate]) -> Result<()> {
        let request = CarouselReorderRequest { images: updates };
        self.http
            .post_json::<_, serde_json::Value>("/api/v1/carousel-images/reorder", &request)
            .await?
            .into_ok()
    }
}
