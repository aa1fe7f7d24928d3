//! Testimonial message model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub author: String,
    pub organization: Option<String>,
    pub body: String,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTestimonialRequest {
    pub author: String,
    pub organization: Option<String>,
    pub body: String,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTestimonialRequest {
    pub author: Option<String>,
    pub organization: Option<String>,
    pub body: Option<String>,
    pub order: Option<u32>,
}
