//! Testimonial administration screen
//!
//! Same optimistic reorder flow as the carousel, over testimonial messages.

use std::sync::Arc;
use tracing::warn;
use crate::api::TestimonialApi;
use crate::models::testimonial::{CreateTestimonialRequest, TestimonialMessage};
use crate::models::AdminLevel;
use crate::session::{check_screen_access, Screen};
use crate::utils::errors::Result;
use crate::utils::logging::log_screen_event;
use crate::utils::validation::validate_required;
use super::notify::NoticeCenter;
use super::ordering::reorder_plan;

pub struct TestimonialScreen {
    api: TestimonialApi,
    notices: Arc<NoticeCenter>,
    messages: Vec<TestimonialMessage>,
}

impl TestimonialScreen {
    pub fn open(api: TestimonialApi, level: AdminLevel, notices: Arc<NoticeCenter>) -> Result<Self> {
        check_screen_access(level, Screen::Testimonials)?;

        Ok(Self {
            api,
            notices,
            messages: Vec::new(),
        })
    }

    pub fn messages(&self) -> &[TestimonialMessage] {
        &self.messages
    }

    pub async fn load(&mut self) -> Result<()> {
        match self.api.list().await {
            Ok(mut messages) => {
                messages.sort_by_key(|message| message.order);
                self.messages = messages;
                Ok(())
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    /// Optimistically move a testimonial and persist the new order
    pub async fn move_message(&mut self, from: usize, to: usize) -> Result<()> {
        let updates = match reorder_plan(&mut self.messages, from, to) {
            Ok(updates) => updates,
            Err(e) => {
                self.notices.failure(&e);
                return Err(e);
            }
        };
        log_screen_event("testimonials", "reorder", Some(&format!("{} -> {}", from, to)));

        match self.api.reorder(&updates).await {
            Ok(()) => {
                self.notices.success("Testimonial order saved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Reorder rejected, reloading server order");
                self.notices.failure(&e);
                let _ = self.load().await;
                Err(e)
            }
        }
    }

    /// Add a testimonial at the end of the list
    pub async fn add_message(
        &mut self,
        author: String,
        organization: Option<String>,
        body: String,
    ) -> Result<()> {
        if let Err(e) = validate_required("author", &author).and_then(|_| validate_required("message", &body)) {
            self.notices.failure(&e);
            return Err(e);
        }

        let request = CreateTestimonialRequest {
            author,
            organization,
            body,
            order: self.messages.len() as u32,
        };

        match self.api.create(&request).await {
            Ok(_) => {
                self.notices.success("Testimonial added");
                self.load().await
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    pub async fn remove_message(&mut self, id: &str) -> Result<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.notices.success("Testimonial deleted");
                self.load().await
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }
}
