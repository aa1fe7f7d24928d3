//! User administration screen
//!
//! Paginated user listing, search-as-you-type with ranked suggestions,
//! keyboard navigation over the suggestion list, and admin-level promotion.
//! A second search issued while one is in flight is not cancelled; whichever
//! response resolves last populates the screen.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use crate::api::UserApi;
use crate::config::{PaginationConfig, SearchConfig};
use crate::export;
use crate::models::{AdminLevel, User};
use crate::search::{build_suggestions, Suggestion};
use crate::session::{check_screen_access, Screen};
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;
use super::nav::{NavKey, NavOutcome, SuggestionNav};
use super::notify::NoticeCenter;
use super::pagination::Pager;

/// Which listing the pager is currently walking
#[derive(Debug, Clone, PartialEq, Eq)]
enum ListMode {
    All,
    Search(String),
}

pub struct UserAdminScreen {
    api: UserApi,
    search_config: SearchConfig,
    notices: Arc<NoticeCenter>,
    pager: Pager,
    mode: ListMode,
    users: Vec<User>,
    query: String,
    suggestions: Vec<Suggestion>,
    nav: SuggestionNav,
}

impl UserAdminScreen {
    /// Open the screen; denied below super-admin level
    pub fn open(
        api: UserApi,
        level: AdminLevel,
        pagination: &PaginationConfig,
        search: &SearchConfig,
        notices: Arc<NoticeCenter>,
    ) -> Result<Self> {
        check_screen_access(level, Screen::Users)?;

        Ok(Self {
            api,
            search_config: search.clone(),
            notices,
            pager: Pager::new(pagination.default_limit),
            mode: ListMode::All,
            users: Vec::new(),
            query: String::new(),
            suggestions: Vec::new(),
            nav: SuggestionNav::new(),
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn nav(&self) -> &SuggestionNav {
        &self.nav
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Load the current page of whichever listing is active
    pub async fn load_page(&mut self) -> Result<()> {
        let result = match &self.mode {
            ListMode::All => self.api.list(self.pager.page(), self.pager.limit()).await,
            ListMode::Search(query) => {
                self.api.search(query, self.pager.page(), self.pager.limit()).await
            }
        };

        match result {
            Ok(page) => {
                self.pager.set_total(page.total);
                self.users = page.items;
                Ok(())
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    pub async fn next_page(&mut self) -> Result<()> {
        if self.pager.next_page() {
            self.load_page().await?;
        }
        Ok(())
    }

    pub async fn prev_page(&mut self) -> Result<()> {
        if self.pager.prev_page() {
            self.load_page().await?;
        }
        Ok(())
    }

    /// Jump to a page without loading it yet
    pub fn go_to_page(&mut self, page: u32) {
        self.pager.set_page(page);
    }

    /// Update the query text and rebuild the suggestion list from the
    /// records already on screen
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.suggestions = build_suggestions(&self.query, &self.users, &self.search_config);
        self.nav.sync(self.suggestions.len());
    }

    /// Feed a key press into the suggestion list; commits and raw searches
    /// trigger the corresponding backend call
    pub async fn handle_key(&mut self, key: NavKey) -> Result<()> {
        match self.nav.handle_key(key) {
            NavOutcome::None | NavOutcome::Dismissed => Ok(()),
            NavOutcome::Commit(index) => {
                let value = match self.suggestions.get(index) {
                    Some(suggestion) => suggestion.value.clone(),
                    None => return Ok(()),
                };
                self.query = value;
                self.suggestions.clear();
                self.run_search().await
            }
            NavOutcome::SearchRaw => {
                self.suggestions.clear();
                self.run_search().await
            }
        }
    }

    /// Search the backend with the current query text
    pub async fn run_search(&mut self) -> Result<()> {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            self.mode = ListMode::All;
        } else {
            self.mode = ListMode::Search(query);
        }
        self.pager.reset();
        self.load_page().await
    }

    /// Clear the search and return to the plain listing
    pub async fn clear_search(&mut self) -> Result<()> {
        self.query.clear();
        self.suggestions.clear();
        self.nav.close();
        self.mode = ListMode::All;
        self.pager.reset();
        self.load_page().await
    }

    /// Change a user's admin level; `actor` identifies who asked, for the log
    pub async fn promote(&mut self, actor: &str, user_id: &str, level: AdminLevel) -> Result<()> {
        match self.api.update_admin_status(user_id, level).await {
            Ok(updated) => {
                log_admin_action(actor, "update_admin_status", Some(user_id), Some(&level.to_string()));
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == user_id) {
                    *slot = updated;
                }
                self.notices.success(format!("Admin level set to {}", level));
                Ok(())
            }
            Err(e) => {
                self.notices.failure(&e);
                Err(e)
            }
        }
    }

    /// Write the on-screen user list to a CSV file
    pub async fn export_csv(&self, output_dir: &str) -> Result<PathBuf> {
        let path = export::write_users_csv(&self.users, output_dir).await?;
        info!(path = %path.display(), "User list exported");
        self.notices.success(format!("Exported {} users", self.users.len()));
        Ok(path)
    }
}
