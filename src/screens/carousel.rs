//! Carousel administration screen
//!
//! Ordered image list with an optimistic drag-and-drop reorder flow: the
//! local list is mutated first, the full order vector goes to the backend in
//! one call, and a rejection discards the optimistic state by refetching the
//! authoritative order. No retry, no conflict resolution.

use std::path::Path;
use std::sync::Arc;
use tracing::warn;
use crate::api::CarouselApi;
use crate::models::carousel::{CarouselImage, CreateCarouselImageRequest};
use crate::models::AdminLevel;
use crate::session::{check_screen_access, Screen};
use crate::utils::errors::Result;
use crate::utils::logging::log_screen_event;
use super::notify::NoticeCenter;
use super::ordering::reorder_plan;

pub struct CarouselScreen {
    api: CarouselApi,
    notices: Arc<NoticeCenter>,
    images: Vec<CarouselImage>,
}

impl CarouselScreen {
    pub fn open(api: CarouselApi, level: AdminLevel, notices: Arc<NoticeCenter>) -> Result<Self> {
        check_screen_access(level, Screen::Carousel)?;

        Ok(Self {
            api,
            notices,
            images: Vec::new(),
        })
    }

    pub fn images(&self) -> &[CarouselImage] {
        &self.images
    }

    /// Fetch the authoritative image list, sorted by display order
    pub async fn load(&mut self) -> Result<()> {
        match self.api.list().await {
            Ok(mut images) => {
                images.sort_by_key(|image| image.order);
                self.images = images;
                Ok(())
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    /// Optimistically move an image and persist the new order.
    ///
    /// On rejection the local list is thrown away and the server order is
    /// refetched, so the screen never keeps an order the backend refused.
    pub async fn move_image(&mut self, from: usize, to: usize) -> Result<()> {
        let updates = match reorder_plan(&mut self.images, from, to) {
            Ok(updates) => updates,
            Err(e) => {
                self.notices.failure(&e);
                return Err(e);
            }
        };
        log_screen_event("carousel", "reorder", Some(&format!("{} -> {}", from, to)));

        match self.api.reorder(&updates).await {
            Ok(()) => {
                self.notices.success("Carousel order saved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Reorder rejected, reloading server order");
                self.notices.failure(&e);
                // discard the optimistic order; ignore a refetch failure
                // beyond its own notice
                let _ = self.load().await;
                Err(e)
            }
        }
    }

    /// Upload a new image at the end of the carousel
    pub async fn add_image(&mut self, caption: Option<String>, file: &Path) -> Result<()> {
        let request = CreateCarouselImageRequest {
            caption,
            order: self.images.len() as u32,
        };

        match self.api.create(&request, file).await {
            Ok(_) => {
                self.notices.success("Image uploaded");
                self.load().await
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    /// Delete an image and refresh the list
    pub async fn remove_image(&mut self, id: &str) -> Result<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.notices.success("Image deleted");
                self.load().await
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }
}
