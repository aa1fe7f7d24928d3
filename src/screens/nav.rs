//! Keyboard navigation over the suggestion list
//!
//! A small state machine: the list is either closed or open with a selected
//! index. `-1` means the query text itself is highlighted and Enter runs a
//! raw search. The selected index is clamped to `[-1, n-1]` on every
//! transition and Escape always closes.

/// Navigation state of the suggestion dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Closed,
    Open { selected: isize },
}

/// Keys the dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What a key press asks the owning screen to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing to act on (list closed, or a pure selection move)
    None,
    /// Commit the suggestion at this index and close
    Commit(usize),
    /// Run a search with the raw query text and close
    SearchRaw,
    /// List dismissed without committing
    Dismissed,
}

/// Keyboard navigation state for one suggestion list
#[derive(Debug, Clone)]
pub struct SuggestionNav {
    state: NavState,
    count: usize,
}

impl SuggestionNav {
    pub fn new() -> Self {
        Self {
            state: NavState::Closed,
            count: 0,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, NavState::Open { .. })
    }

    /// Currently selected index, if the list is open
    pub fn selected(&self) -> Option<isize> {
        match self.state {
            NavState::Open { selected } => Some(selected),
            NavState::Closed => None,
        }
    }

    /// Track a fresh suggestion list: open on ≥1 entries, close on none.
    ///
    /// Selection resets to -1; a previous selection is meaningless against
    /// new suggestions.
    pub fn sync(&mut self, suggestion_count: usize) {
        self.count = suggestion_count;
        self.state = if suggestion_count > 0 {
            NavState::Open { selected: -1 }
        } else {
            NavState::Closed
        };
    }

    /// Explicitly close the list
    pub fn close(&mut self) {
        self.state = NavState::Closed;
    }

    /// Apply a key press and report what the screen should do
    pub fn handle_key(&mut self, key: NavKey) -> NavOutcome {
        let selected = match self.state {
            NavState::Closed => return NavOutcome::None,
            NavState::Open { selected } => selected,
        };

        match key {
            NavKey::ArrowDown => {
                let max = self.count as isize - 1;
                self.state = NavState::Open {
                    selected: (selected + 1).min(max),
                };
                NavOutcome::None
            }
            NavKey::ArrowUp => {
                self.state = NavState::Open {
                    selected: (selected - 1).max(-1),
                };
                NavOutcome::None
            }
            NavKey::Enter => {
                self.state = NavState::Closed;
                if selected >= 0 {
                    NavOutcome::Commit(selected as usize)
                } else {
                    NavOutcome::SearchRaw
                }
            }
            NavKey::Escape => {
                self.state = NavState::Closed;
                NavOutcome::Dismissed
            }
        }
    }
}

impl Default for SuggestionNav {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_nav(count: usize) -> SuggestionNav {
        let mut nav = SuggestionNav::new();
        nav.sync(count);
        nav
    }

    #[test]
    fn test_empty_suggestions_keep_list_closed() {
        let mut nav = SuggestionNav::new();
        nav.sync(0);
        assert_eq!(nav.state(), NavState::Closed);
        assert_eq!(nav.handle_key(NavKey::ArrowDown), NavOutcome::None);
    }

    #[test]
    fn test_selection_clamps_at_bounds() {
        let mut nav = open_nav(3);
        assert_eq!(nav.selected(), Some(-1));

        nav.handle_key(NavKey::ArrowUp);
        assert_eq!(nav.selected(), Some(-1));

        for _ in 0..10 {
            nav.handle_key(NavKey::ArrowDown);
        }
        assert_eq!(nav.selected(), Some(2));
    }

    #[test]
    fn test_enter_commits_selected_suggestion() {
        let mut nav = open_nav(3);
        nav.handle_key(NavKey::ArrowDown);
        nav.handle_key(NavKey::ArrowDown);
        assert_eq!(nav.handle_key(NavKey::Enter), NavOutcome::Commit(1));
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn test_enter_without_selection_searches_raw() {
        let mut nav = open_nav(2);
        assert_eq!(nav.handle_key(NavKey::Enter), NavOutcome::SearchRaw);
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn test_escape_always_closes() {
        let mut nav = open_nav(5);
        nav.handle_key(NavKey::ArrowDown);
        assert_eq!(nav.handle_key(NavKey::Escape), NavOutcome::Dismissed);
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn test_sync_resets_selection() {
        let mut nav = open_nav(4);
        nav.handle_key(NavKey::ArrowDown);
        nav.handle_key(NavKey::ArrowDown);
        nav.sync(2);
        assert_eq!(nav.selected(), Some(-1));
    }
}
