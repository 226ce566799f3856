//! Pagination data model shared by the hook, the API client, and the
//! list pages.
//!
//! The backend reports pagination metadata in camelCase JSON
//! (`currentPage`, `totalPages`); `totalPages` is optional on the wire
//! and gets derived from `total` and `limit` when the backend leaves it
//! out.

pub mod query;

#[cfg(test)]
mod paging_test;
#[cfg(test)]
mod query_test;

use serde::{Deserialize, Serialize};

/// First page shown when the URL carries no usable `page` value.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: usize = 10;

/// A page request: which page to fetch and how many items per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

impl PageQuery {
    /// Read `page` and `limit` from query parameters, coercing each to
    /// a positive integer and falling back to page 1 / `default_limit`
    /// when a value is missing, zero, or not numeric.
    pub fn from_query(pairs: &[(String, String)], default_limit: usize) -> Self {
        Self {
            page: positive_param(pairs, "page").unwrap_or(DEFAULT_PAGE),
            limit: positive_param(pairs, "limit").unwrap_or(default_limit),
        }
    }

    /// Query-string pairs for this request, in the shape
    /// [`QueryNavigator::push_query`](crate::nav::QueryNavigator::push_query)
    /// takes.
    pub fn as_params(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}

fn positive_param(pairs: &[(String, String)], key: &str) -> Option<usize> {
    query::get(pairs, key)?.parse::<usize>().ok().filter(|n| *n > 0)
}

/// Pagination metadata reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub current_page: usize,
    pub limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
}

impl PageMeta {
    /// Metadata shown before the first fetch resolves: nothing loaded
    /// yet, a single assumed page.
    pub fn initial(query: PageQuery) -> Self {
        Self {
            total: 0,
            current_page: query.page,
            limit: query.limit,
            total_pages: Some(1),
        }
    }

    /// Fill in `total_pages` when the backend omitted it. With a zero
    /// `limit` there is nothing to divide by and the field stays
    /// `None`.
    pub fn normalized(mut self) -> Self {
        if self.total_pages.is_none() && self.limit > 0 {
            self.total_pages = Some(self.total.div_ceil(self.limit));
        }
        self
    }

    /// Page to fetch for a "next" action, if there is one.
    ///
    /// An unknown page count means the backend never said where the
    /// list ends, so forward navigation stays enabled.
    pub fn next_page(&self) -> Option<usize> {
        match self.total_pages {
            Some(last) if self.current_page >= last => None,
            _ => Some(self.current_page + 1),
        }
    }

    /// Page to fetch for a "previous" action, if there is one.
    pub fn prev_page(&self) -> Option<usize> {
        if self.current_page > 1 {
            Some(self.current_page - 1)
        } else {
            None
        }
    }

    /// The request this metadata answers, for refetching.
    pub fn query(&self) -> PageQuery {
        PageQuery {
            page: self.current_page,
            limit: self.limit,
        }
    }
}

/// One page of results plus its pagination metadata, as returned by the
/// backend list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFeed<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}
