//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format a timestamp for filenames (no spaces or colons)
pub fn format_file_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y%m%d-%H%M%S").to_string()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        text.to_string()
    } else {
        format!("{}...", &text[..max_length.saturating_sub(3)])
    }
}

/// Sanitize filename for safe upload
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Fallback filename for an upload whose path carries no usable name
pub fn fallback_upload_name(extension: &str) -> String {
    format!("upload-{}.{}", generate_random_string(8), extension)
}

/// Create a pagination info string
pub fn create_pagination_info(current_page: u32, total_pages: u32, total_items: u64) -> String {
    if total_pages <= 1 {
        format!("Total: {}", total_items)
    } else {
        format!("Page {} of {} (Total: {})", current_page, total_pages, total_items)
    }
}

/// Calculate pagination offset
pub fn calculate_offset(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1) * page_size
}

/// Generate a random alphanumeric string
pub fn generate_random_string(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                            abcdefghijklmnopqrstuvwxyz\
                            0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("demo day.jpg"), "demo_day.jpg");
        assert_eq!(sanitize_filename("poster(1).png"), "poster_1_.png");
    }

    #[test]
    fn test_pagination_math() {
        assert_eq!(calculate_offset(1, 10), 0);
        assert_eq!(calculate_offset(3, 10), 20);
        assert_eq!(calculate_offset(0, 10), 0);
    }

    #[test]
    fn test_pagination_info() {
        assert_eq!(create_pagination_info(1, 1, 4), "Total: 4");
        assert_eq!(create_pagination_info(2, 5, 42), "Page 2 of 5 (Total: 42)");
    }

    #[test]
    fn test_fallback_upload_name() {
        let name = fallback_upload_name("jpg");
        assert!(name.starts_with("upload-"));
        assert!(name.ends_with(".jpg"));
    }
}
