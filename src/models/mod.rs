//! Data models module
//!
//! This module contains the backend record types consumed by the admin
//! screens. Records are defined by the backend and consumed as-is; wire
//! field names (`_id`, `imageUrl`, ...) are preserved through serde renames.

pub mod common;
pub mod user;
pub mod event;
pub mod carousel;
pub mod testimonial;
pub mod newsletter;
pub mod media;
pub mod roadmap;
pub mod stock;
pub mod team;
pub mod tender;

// Re-export commonly used models
pub use common::{ApiResponse, Paginated, OrderUpdate};
pub use user::{User, AdminLevel, UpdateAdminStatusRequest};
pub use event::{Event, CreateEventRequest, UpdateEventRequest};
pub use carousel::{CarouselImage, CreateCarouselImageRequest, UpdateCarouselImageRequest};
pub use testimonial::{TestimonialMessage, CreateTestimonialRequest, UpdateTestimonialRequest};
pub use newsletter::{Newsletter, CreateNewsletterRequest, UpdateNewsletterRequest};
pub use media::{PressMediaItem, CreatePressMediaRequest, UpdatePressMediaRequest};
pub use roadmap::{RoadmapItem, CreateRoadmapRequest, UpdateRoadmapRequest};
pub use stock::{Stock, CreateStockRequest, UpdateStockRequest};
pub use team::{TeamMember, CreateTeamMemberRequest, UpdateTeamMemberRequest};
pub use tender::{Tender, CreateTenderRequest, UpdateTenderRequest};
