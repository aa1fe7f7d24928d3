//! HubDesk Admin Console
//!
//! The operator side of an incubation center's content platform: typed
//! clients for the center's REST backend, admin-screen view-models for user
//! management, content ordering, and inventory, and the client-side search
//! and keyboard-navigation helpers behind them.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod api;
pub mod session;
pub mod search;
pub mod screens;
pub mod export;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{HubDeskError, Result};

// Re-export main components for easy access
pub use api::ApiClient;
pub use session::{TokenStore, SessionContext};
pub use screens::NoticeCenter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
