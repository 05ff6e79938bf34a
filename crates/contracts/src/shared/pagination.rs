//! Pagination envelopes shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by list endpoints.
///
/// Pages are 0-indexed; the UI renders `page + 1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListQuery {
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    /// `Some(true)` restricts the listing to active records
    #[serde(rename = "activeOnly", skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
    /// Server-side substring match on the display fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 50,
            active_only: None,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    pub fn with_active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only.then_some(true);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

/// One page of a listing plus the totals the pagination controls need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

impl<T> PagedResponse<T> {
    /// Number of pages needed for `total_count` items. Empty listings have
    /// zero pages, not one.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(total_count: usize, page_size: usize) -> PagedResponse<()> {
        PagedResponse {
            items: Vec::new(),
            total_count,
            page: 0,
            page_size,
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(paged(0, 50).total_pages(), 0);
        assert_eq!(paged(1, 50).total_pages(), 1);
        assert_eq!(paged(50, 50).total_pages(), 1);
        assert_eq!(paged(51, 50).total_pages(), 2);
        assert_eq!(paged(100, 0).total_pages(), 0);
    }

    #[test]
    fn search_builder_drops_blank_input() {
        let q = ListQuery::new(0, 50).with_search("   ");
        assert_eq!(q.search, None);
        let q = ListQuery::new(0, 50).with_search(" tea ");
        assert_eq!(q.search.as_deref(), Some("tea"));
    }

    #[test]
    fn active_only_serializes_only_when_set() {
        let q = ListQuery::new(2, 100);
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("activeOnly").is_none());

        let q = q.with_active_only(true);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["activeOnly"], true);
    }
}
