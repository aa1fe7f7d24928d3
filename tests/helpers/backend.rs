//! Mock content backend
//!
//! Wiremock-based stand-in for the REST backend, plus helpers for building
//! the response envelope every endpoint wraps its payload in.

use std::sync::Arc;
use serde::Serialize;
use serde_json::{json, Value};
use wiremock::MockServer;

use HubDesk::api::ApiClient;
use HubDesk::config::Settings;
use HubDesk::session::TokenStore;

/// The token every test client sends
pub const TEST_TOKEN: &str = "test-session-token";

/// Start a fresh mock backend
pub async fn spawn_backend() -> MockServer {
    MockServer::start().await
}

/// Settings pointed at the mock backend
pub fn test_settings(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = server.uri();
    settings.auth.token = Some(TEST_TOKEN.to_string());
    settings
}

/// An ApiClient wired to the mock backend with the test token
pub fn api_client(server: &MockServer) -> ApiClient {
    let settings = test_settings(server);
    let tokens = Arc::new(TokenStore::with_token(TEST_TOKEN));
    ApiClient::new(&settings, tokens).expect("client construction")
}

/// `{success: true, data: ...}` envelope
pub fn success_body<T: Serialize>(data: T) -> Value {
    json!({
        "success": true,
        "message": null,
        "data": data,
    })
}

/// `{success: false, message: ...}` envelope
pub fn rejection_body(message: &str) -> Value {
    json!({
        "success": false,
        "message": message,
        "data": null,
    })
}

/// Envelope around one page of a listing
pub fn paginated_body<T: Serialize>(items: &[T], total: u64, page: u32, limit: u32) -> Value {
    json!({
        "success": true,
        "message": null,
        "data": {
            "items": items,
            "total": total,
            "page": page,
            "limit": limit,
        },
    })
}
