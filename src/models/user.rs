//! User model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::utils::errors::HubDeskError;

/// Admin level controlling which admin screens a user may reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AdminLevel {
    /// Regular member, no admin screens
    Member = 0,
    /// Content moderator, content screens only
    Moderator = 1,
    /// Full administrator, all screens including user management
    Super = 2,
}

impl TryFrom<u8> for AdminLevel {
    type Error = HubDeskError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AdminLevel::Member),
            1 => Ok(AdminLevel::Moderator),
            2 => Ok(AdminLevel::Super),
            other => Err(HubDeskError::InvalidInput(format!("Unknown admin level: {}", other))),
        }
    }
}

impl From<AdminLevel> for u8 {
    fn from(level: AdminLevel) -> Self {
        level as u8
    }
}

impl std::fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminLevel::Member => write!(f, "member"),
            AdminLevel::Moderator => write!(f, "moderator"),
            AdminLevel::Super => write!(f, "super"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub admin: AdminLevel,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v1/updateAdminStatus`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAdminStatusRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub admin: AdminLevel,
}
