//! Admin screen access control
//!
//! Each admin screen declares the minimum admin level needed to reach it.
//! Level checks gate screen entry only; the backend enforces the real
//! authorization on every call.

use tracing::{debug, warn};
use crate::models::AdminLevel;
use crate::utils::errors::{HubDeskError, Result};

/// The admin screens of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Users,
    Events,
    Carousel,
    Testimonials,
    Newsletters,
    Media,
    Roadmap,
    Stock,
    Team,
    Tenders,
}

impl Screen {
    /// Minimum admin level required to open this screen
    pub fn required_level(&self) -> AdminLevel {
        match self {
            // Changing other users' admin status is reserved for full admins
            Screen::Users => AdminLevel::Super,
            Screen::Tenders => AdminLevel::Super,
            _ => AdminLevel::Moderator,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Users => "users",
            Screen::Events => "events",
            Screen::Carousel => "carousel",
            Screen::Testimonials => "testimonials",
            Screen::Newsletters => "newsletters",
            Screen::Media => "media",
            Screen::Roadmap => "roadmap",
            Screen::Stock => "stock",
            Screen::Team => "team",
            Screen::Tenders => "tenders",
        }
    }
}

/// Check whether a user at `level` may open `screen`
pub fn check_screen_access(level: AdminLevel, screen: Screen) -> Result<()> {
    if level >= screen.required_level() {
        debug!(screen = screen.name(), level = %level, "Screen access granted");
        Ok(())
    } else {
        warn!(screen = screen.name(), level = %level, "Screen access denied");
        Err(HubDeskError::PermissionDenied(format!(
            "The {} screen requires {} access",
            screen.name(),
            screen.required_level()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_reaches_no_admin_screens() {
        assert!(check_screen_access(AdminLevel::Member, Screen::Carousel).is_err());
        assert!(check_screen_access(AdminLevel::Member, Screen::Users).is_err());
    }

    #[test]
    fn test_moderator_reaches_content_screens_only() {
        assert!(check_screen_access(AdminLevel::Moderator, Screen::Carousel).is_ok());
        assert!(check_screen_access(AdminLevel::Moderator, Screen::Stock).is_ok());
        assert!(check_screen_access(AdminLevel::Moderator, Screen::Users).is_err());
        assert!(check_screen_access(AdminLevel::Moderator, Screen::Tenders).is_err());
    }

    #[test]
    fn test_super_reaches_everything() {
        assert!(check_screen_access(AdminLevel::Super, Screen::Users).is_ok());
        assert!(check_screen_access(AdminLevel::Super, Screen::Tenders).is_ok());
    }
}
