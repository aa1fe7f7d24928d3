//! HTTP plumbing for the content backend API
//!
//! This module owns the reqwest client setup, the `token` request header,
//! response envelope decoding, multipart upload assembly, and the mapping
//! from transport failures to the crate error type. Individual resource
//! clients build on these primitives.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use crate::config::ApiConfig;
use crate::models::common::ApiResponse;
use crate::session::TokenStore;
use crate::utils::errors::{HubDeskError, Result};
use crate::utils::helpers;
use crate::utils::logging::log_request_timing;

/// Shared HTTP client for all backend resources
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<TokenStore>,
}

impl HttpClient {
    /// Create a new HttpClient instance
    pub fn new(config: &ApiConfig, tokens: Arc<TokenStore>) -> Result<Self> {
        // Fail early on an unparseable base URL instead of on the first call
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(HubDeskError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Absolute URL for an API path
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session token header when one is stored
    fn with_token(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.token() {
            Some(token) => builder.header("token", token),
            None => builder,
        }
    }

    /// GET a JSON envelope
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let request = self.with_token(self.client.get(self.endpoint(path)));
        self.dispatch(path, request).await
    }

    /// POST a JSON body, expecting a JSON envelope back
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let request = self.with_token(self.client.post(self.endpoint(path)).json(body));
        self.dispatch(path, request).await
    }

    /// PUT a JSON body, expecting a JSON envelope back
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let request = self.with_token(self.client.put(self.endpoint(path)).json(body));
        self.dispatch(path, request).await
    }

    /// DELETE, expecting a JSON envelope back
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let request = self.with_token(self.client.delete(self.endpoint(path)));
        self.dispatch(path, request).await
    }

    /// POST a multipart form (file uploads), expecting a JSON envelope back
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse<T>> {
        let request = self.with_token(self.client.post(self.endpoint(path)).multipart(form));
        self.dispatch(path, request).await
    }

    /// PUT a multipart form, expecting a JSON envelope back
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse<T>> {
        let request = self.with_token(self.client.put(self.endpoint(path)).multipart(form));
        self.dispatch(path, request).await
    }

    /// Send a prepared request and decode the envelope
    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let request_id = helpers::generate_uuid();
        debug!(request_id = %request_id, path = path, "Sending backend request");

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            log_request_timing(path, started.elapsed().as_millis() as u64, false);
            if e.is_timeout() {
                HubDeskError::Timeout
            } else if e.is_connect() {
                HubDeskError::ServiceUnavailable(self.base_url.clone())
            } else {
                HubDeskError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log_request_timing(path, started.elapsed().as_millis() as u64, false);
            warn!(request_id = %request_id, path = path, status = status.as_u16(), "Backend returned error status");
            return Err(HubDeskError::Backend {
                status: status.as_u16(),
                message: helpers::truncate_text(&message, 200),
            });
        }

        let envelope = response.json::<ApiResponse<T>>().await.map_err(HubDeskError::Http)?;
        log_request_timing(path, started.elapsed().as_millis() as u64, true);
        Ok(envelope)
    }
}

/// Build a multipart file part from a local path.
///
/// The part name on disk may be unusable (missing or non-ASCII); a sanitized
/// or generated name is substituted so the backend always sees a filename.
pub async fn file_part(path: &Path) -> Result<reqwest::multipart::Part> {
    let bytes = tokio::fs::read(path).await?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin")
        .to_lowercase();

    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => helpers::sanitize_filename(name),
        None => helpers::fallback_upload_name(&extension),
    };

    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    };

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime)
        .map_err(HubDeskError::Http)?;

    Ok(part)
}
