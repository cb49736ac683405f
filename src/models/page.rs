//! List response envelopes
//!
//! List endpoints return either a bare array or a page envelope
//! `{content, number, totalPages}` depending on whether paging parameters
//! were supplied; `Listing` absorbs both shapes.

use serde::{Deserialize, Serialize};

/// Page envelope returned by paged list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub total_pages: i64,
}

/// Either shape a list endpoint may return
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Items regardless of envelope shape
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paged(page) => page.content,
            Listing::Plain(items) => items,
        }
    }

    /// Current page index and total pages, when paged
    pub fn page_info(&self) -> Option<(i64, i64)> {
        match self {
            Listing::Paged(page) => Some((page.number, page.total_pages)),
            Listing::Plain(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_shape() {
        let json = r#"{"content": [1, 2, 3], "number": 0, "totalPages": 2}"#;
        let listing: Listing<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(listing.page_info(), Some((0, 2)));
        assert_eq!(listing.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn test_plain_shape() {
        let json = r#"[4, 5]"#;
        let listing: Listing<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(listing.page_info(), None);
        assert_eq!(listing.into_items(), vec![4, 5]);
    }
}
