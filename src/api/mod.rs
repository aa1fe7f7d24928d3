//! Typed REST clients for the content backend
//!
//! One client per backend resource, all sharing a single [`HttpClient`].
//! Network failures are never retried here; callers surface them as
//! transient notices.

pub mod http;
pub mod users;
pub mod events;
pub mod carousel;
pub mod testimonials;
pub mod newsletters;
pub mod media;
pub mod roadmap;
pub mod stock;
pub mod team;
pub mod tenders;

// Re-export resource clients
pub use http::HttpClient;
pub use users::UserApi;
pub use events::EventApi;
pub use carousel::CarouselApi;
pub use testimonials::TestimonialApi;
pub use newsletters::NewsletterApi;
pub use media::MediaApi;
pub use roadmap::RoadmapApi;
pub use stock::StockApi;
pub use team::TeamApi;
pub use tenders::TenderApi;

use std::sync::Arc;
use chrono::{DateTime, Utc};
use crate::config::Settings;
use crate::session::TokenStore;
use crate::utils::errors::{HubDeskError, Result};

/// Rewrite a backend 404 into a typed not-found error
pub(crate) fn map_not_found(err: HubDeskError, resource: &str, id: &str) -> HubDeskError {
    match err {
        HubDeskError::Backend { status: 404, .. } => HubDeskError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        },
        other => other,
    }
}

/// Aggregate client for all backend resources
#[derive(Clone)]
pub struct ApiClient {
    pub users: UserApi,
    pub events: EventApi,
    pub carousel: CarouselApi,
    pub testimonials: TestimonialApi,
    pub newsletters: NewsletterApi,
    pub media: MediaApi,
    pub roadmap: RoadmapApi,
    pub stock: StockApi,
    pub team: TeamApi,
    pub tenders: TenderApi,
}

impl ApiClient {
    /// Create a new ApiClient with all resource clients initialized
    pub fn new(settings: &Settings, tokens: Arc<TokenStore>) -> Result<Self> {
        let http = HttpClient::new(&settings.api, tokens)?;

        Ok(Self {
            users: UserApi::new(http.clone()),
            events: EventApi::new(http.clone()),
            carousel: CarouselApi::new(http.clone()),
            testimonials: TestimonialApi::new(http.clone()),
            newsletters: NewsletterApi::new(http.clone()),
            media: MediaApi::new(http.clone()),
            roadmap: RoadmapApi::new(http.clone()),
            stock: StockApi::new(http.clone()),
            team: TeamApi::new(http.clone()),
            tenders: TenderApi::new(http),
        })
    }

    /// Probe two cheap public endpoints concurrently
    pub async fn health_check(&self) -> BackendHealth {
        let (carousel, roadmap) =
            futures::join!(self.carousel.list(), self.roadmap.list());

        BackendHealth {
            carousel_ok: carousel.is_ok(),
            roadmap_ok: roadmap.is_ok(),
            checked_at: Utc::now(),
        }
    }
}

/// Backend reachability status
#[derive(Debug, Clone)]
pub struct BackendHealth {
    pub carousel_ok: bool,
    pub roadmap_ok: bool,
    pub checked_at: DateTime<Utc>,
}

impl BackendHealth {
    /// Check if all probed endpoints responded
    pub fn is_healthy(&self) -> bool {
        self.carousel_ok && self.roadmap_ok
    }

    /// Get list of failing probes
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.carousel_ok {
            issues.push("Carousel endpoint unreachable".to_string());
        }
        if !self.roadmap_ok {
            issues.push("Roadmap endpoint unreachable".to_string());
        }

        issues
    }
}
