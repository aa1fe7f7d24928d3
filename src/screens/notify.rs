//! Transient notice center
//!
//! Every caught failure and every completed action becomes a notice in a
//! bounded queue the UI drains and shows as a banner. Nothing here retries
//! anything; a notice is the end of the line for an error.

use std::collections::VecDeque;
use std::sync::Mutex;
use chrono::{DateTime, Utc};
use tracing::debug;
use crate::utils::errors::{ErrorSeverity, HubDeskError};

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeSeverity::Info => write!(f, "info"),
            NoticeSeverity::Success => write!(f, "success"),
            NoticeSeverity::Warning => write!(f, "warning"),
            NoticeSeverity::Error => write!(f, "error"),
        }
    }
}

/// One transient banner message
#[derive(Debug, Clone)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Bounded queue of pending notices
#[derive(Debug)]
pub struct NoticeCenter {
    queue: Mutex<VecDeque<Notice>>,
    capacity: usize,
}

impl NoticeCenter {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Queue a notice, dropping the oldest when full
    pub fn push(&self, severity: NoticeSeverity, text: impl Into<String>) {
        let notice = Notice {
            severity,
            text: text.into(),
            created_at: Utc::now(),
        };
        debug!(severity = %notice.severity, text = %notice.text, "Notice queued");

        let mut queue = self.queue.lock().expect("notice lock poisoned");
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(notice);
    }

    /// Queue a success banner
    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeSeverity::Success, text);
    }

    /// Queue the banner for a caught failure
    pub fn failure(&self, error: &HubDeskError) {
        let severity = match error.severity() {
            ErrorSeverity::Info => NoticeSeverity::Info,
            ErrorSeverity::Warning => NoticeSeverity::Warning,
            ErrorSeverity::Error | ErrorSeverity::Critical => NoticeSeverity::Error,
        };
        self.push(severity, error.display_text());
    }

    /// Take all pending notices
    pub fn drain(&self) -> Vec<Notice> {
        let mut queue = self.queue.lock().expect("notice lock poisoned");
        queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().expect("notice lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notice_uses_display_text() {
        let center = NoticeCenter::new(10);
        center.failure(&HubDeskError::Rejected("Caption too long".to_string()));

        let notices = center.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, NoticeSeverity::Warning);
        assert_eq!(notices[0].text, "Caption too long");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let center = NoticeCenter::new(2);
        center.success("one");
        center.success("two");
        center.success("three");

        let notices = center.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].text, "two");
        assert_eq!(notices[1].text, "three");
    }

    #[test]
    fn test_drain_empties_queue() {
        let center = NoticeCenter::new(5);
        center.success("done");
        assert_eq!(center.len(), 1);
        center.drain();
        assert!(center.is_empty());
    }
}
