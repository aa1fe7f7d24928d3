//! Carousel image model
//!
//! Carousel images are an ordered set; `order` is assigned client-side on
//! reorder and persisted in one call.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselImage {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub caption: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCarouselImageRequest {
    pub caption: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCarouselImageRequest {
    pub caption: Option<String>,
    pub order: Option<u32>,
}
