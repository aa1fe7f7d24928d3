//! Event API client
//!
//! Event create/update carries an optional poster file; with a poster the
//! request goes out as multipart/form-data, otherwise as plain JSON.

use std::path::Path;
use reqwest::multipart::Form;
use crate::models::event::{Event, CreateEventRequest, UpdateEventRequest};
use crate::utils::errors::Result;
use super::http::{HttpClient, file_part};

#[derive(Clone)]
pub struct EventApi {
    http: HttpClient,
}

impl EventApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        self.http.get_json::<Vec<Event>>("/api/v1/event").await?.into_data()
    }

    pub async fn get(&self, id: &str) -> Result<Event> {
        let path = format!("/api/v1/event/{}", id);
        self.http
            .get_json::<Event>(&path)
            .await?
            .into_data()
            .map_err(|e| super::map_not_found(e, "Event", id))
    }

    pub async fn create(&self, request: &CreateEventRequest, poster: Option<&Path>) -> Result<Event> {
        match poster {
            Some(path) => {
                let form = event_form(
                    &request.title,
                    request.description.as_deref(),
                    request.venue.as_deref(),
                    request.date.map(|d| d.to_rfc3339()),
                    request.registration_link.as_deref(),
                    path,
                )
                .await?;
                self.http.post_multipart::<Event>("/api/v1/event", form).await?.into_data()
            }
            None => {
                self.http
                    .post_json::<_, Event>("/api/v1/event", request)
                    .await?
                    .into_data()
            }
        }
    }

    pub async fn update(
        &self,
        id: &str,
        request: &UpdateEventRequest,
        poster: Option<&Path>,
    ) -> Result<Event> {
        let path = format!("/api/v1/event/{}", id);
        let result = match poster {
            Some(file) => {
                let form = event_form(
                    request.title.as_deref().unwrap_or_default(),
                    request.description.as_deref(),
                    request.venue.as_deref(),
                    request.date.map(|d| d.to_rfc3339()),
                    request.registration_link.as_deref(),
                    file,
                )
                .await?;
                self.http.put_multipart::<Event>(&path, form).await?.into_data()
            }
            None => self.http.put_json::<_, Event>(&path, request).await?.into_data(),
        };
        result.map_err(|e| super::map_not_found(e, "Event", id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("/api/v1/event/{}", id);
        self.http
            .delete_json::<serde_json::Value>(&path)
            .await?
            .into_ok()
            .map_err(|e| super::map_not_found(e, "Event", id))
    }
}

/// Assemble the multipart form for an event with a poster attachment
async fn event_form(
    title: &str,
    description: Option<&str>,
    venue: Option<&str>,
    date: Option<String>,
    registration_link: Option<&str>,
    poster: &Path,
) -> Result<Form> {
    let mut form = Form::new().text("title", title.to_string());

    if let Some(description) = description {
        form = form.text("description", description.to_string());
    }
    if let Some(venue) = venue {
        form = form.text("venue", venue.to_string());
    }
    if let Some(date) = date {
        form = form.text("date", date);
    }
    if let Some(link) = registration_link {
        form = form.text("registrationLink", link.to_string());
    }

    let part = file_part(poster).await?;
    Ok(form.part("poster", part))
}
