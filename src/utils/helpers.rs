//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Local, Utc};

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Format an optional timestamp, showing a dash when absent
pub fn format_optional_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => format_timestamp(ts),
        None => "-".to_string(),
    }
}

/// Derive a display file name from an upload URL.
///
/// Takes the last path segment (query string dropped), percent-decodes it and
/// strips the `digits-` timestamp prefix the uploader prepends.
pub fn file_name_from_url(url: &str) -> String {
    let path = url.split('?').next().unwrap_or(url);
    let last = path.rsplit('/').next().unwrap_or(url);
    let decoded = match urlencoding::decode(last) {
        Ok(s) => s.into_owned(),
        Err(_) => last.to_string(),
    };
    match decoded.split_once('-') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) => {
            rest.to_string()
        }
        _ => decoded,
    }
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Create a pagination info string
pub fn create_pagination_info(current_page: i64, total_pages: i64, shown: usize) -> String {
    if total_pages <= 1 {
        format!("Total: {}", shown)
    } else {
        format!("Page {} of {} ({} shown)", current_page + 1, total_pages, shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("http://host/uploads/1712345678-report.pdf?sig=abc"),
            "report.pdf"
        );
        assert_eq!(file_name_from_url("http://host/uploads/plain.png"), "plain.png");
        // Non-numeric prefix is kept
        assert_eq!(file_name_from_url("http://host/uploads/my-notes.txt"), "my-notes.txt");
    }

    #[test]
    fn test_file_name_percent_decoding() {
        assert_eq!(
            file_name_from_url("http://host/uploads/1700000000-%EB%B3%B4%EA%B3%A0%EC%84%9C.hwp"),
            "보고서.hwp"
        );
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }

    #[test]
    fn test_pagination_info() {
        assert_eq!(create_pagination_info(0, 1, 4), "Total: 4");
        assert_eq!(create_pagination_info(1, 3, 10), "Page 2 of 3 (10 shown)");
    }
}
