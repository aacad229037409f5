//! Pagination, filtering, and the list response envelope.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One page's worth of a server-side collection.
///
/// The backend reports the total across all pages in `totalCount`;
/// `items` only ever holds the current page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// `limit` / `offset` pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn page(limit: u32, page_index: u32) -> Self {
        Self {
            limit,
            offset: page_index * limit,
        }
    }
}

/// Active filter set for a list query. Empty filters are omitted from
/// the query string entirely, matching the backend's optional params.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ListFilters {
    pub fn date_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from_date: Some(from),
            to_date: Some(to),
            ..Self::default()
        }
    }

    /// Query-string pairs for this filter set plus the window.
    pub fn to_query(&self, page: &Pagination) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("limit".to_string(), page.limit.to_string()),
            ("offset".to_string(), page.offset.to_string()),
        ];
        if let Some(d) = self.from_date {
            pairs.push(("from_date".to_string(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.to_date {
            pairs.push(("to_date".to_string(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(s) = &self.search {
            pairs.push(("search".to_string(), s.clone()));
        }
        if let Some(c) = &self.category {
            pairs.push(("category".to_string(), c.clone()));
        }
        pairs
    }
}
