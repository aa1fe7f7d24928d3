//! Session token persistence
//!
//! The backend authenticates every admin call through a `token` request
//! header. The token is persisted in a local file between runs, the desktop
//! counterpart of the browser's local storage.

use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{debug, warn};
use crate::config::AuthConfig;
use crate::models::User;
use crate::utils::errors::{HubDeskError, Result};

/// File-backed token storage
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl TokenStore {
    /// Load the token store, reading any previously saved token.
    ///
    /// An inline token in the configuration overrides the file.
    pub async fn load(config: &AuthConfig) -> Result<Self> {
        let path = PathBuf::from(&config.token_file);

        if let Some(token) = &config.token {
            debug!("Using inline token from configuration");
            return Ok(Self {
                path,
                token: RwLock::new(Some(token.clone())),
            });
        }

        let token = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let trimmed = contents.trim().to_string();
                if trimmed.is_empty() { None } else { Some(trimmed) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read token file");
                return Err(e.into());
            }
        };

        Ok(Self {
            path,
            token: RwLock::new(token),
        })
    }

    /// Create a store holding a fixed token, without touching the filesystem
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Create an empty store, without touching the filesystem
    pub fn anonymous() -> Self {
        Self {
            path: PathBuf::new(),
            token: RwLock::new(None),
        }
    }

    /// Current token, if one is stored
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// Whether a token is present
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    /// Store a new token and persist it
    pub async fn set_token(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();

        if !self.path.as_os_str().is_empty() {
            tokio::fs::write(&self.path, &token).await?;
        }
        *self.token.write().expect("token lock poisoned") = Some(token);

        debug!(path = %self.path.display(), "Session token saved");
        Ok(())
    }

    /// Discard the stored token (sign out)
    pub async fn clear(&self) -> Result<()> {
        if !self.path.as_os_str().is_empty() {
            match tokio::fs::remove_file(&self.path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        *self.token.write().expect("token lock poisoned") = None;
        Ok(())
    }
}

/// The signed-in user and their session token
#[derive(Debug, Default)]
pub struct SessionContext {
    user: Option<User>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { user: None }
    }

    /// Record the signed-in user
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Forget the signed-in user
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Admin level of the current session; anonymous sessions are members
    pub fn admin_level(&self) -> crate::models::AdminLevel {
        self.user
            .as_ref()
            .map(|u| u.admin)
            .unwrap_or(crate::models::AdminLevel::Member)
    }

    /// The signed-in user, or an authentication error
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or_else(|| {
            HubDeskError::Authentication("No user is signed in".to_string())
        })
    }
}
