//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the HubDesk application.

use tracing::{info, warn, error, debug};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "hubdesk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log admin actions with structured data
pub fn log_admin_action(actor: &str, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        actor = actor,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log backend API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "Backend API error occurred"
    );
}

/// Log screen-level events (loads, searches, reorders)
pub fn log_screen_event(screen: &str, event: &str, details: Option<&str>) {
    info!(
        screen = screen,
        event = event,
        details = details,
        "Screen event occurred"
    );
}

/// Log a completed export
pub fn log_export(kind: &str, rows: usize, path: &str) {
    info!(
        kind = kind,
        rows = rows,
        path = path,
        "Export written"
    );
}

/// Log backend request timings
pub fn log_request_timing(endpoint: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            endpoint = endpoint,
            duration_ms = duration_ms,
            "Backend request completed"
        );
    } else {
        error!(
            endpoint = endpoint,
            duration_ms = duration_ms,
            "Backend request failed"
        );
    }
}
