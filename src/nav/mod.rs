//! Navigation-service seam between pagination state and the URL bar.
//!
//! The pagination hook never touches browser globals directly: it talks
//! to a [`QueryNavigator`], which the frontend implements over
//! `leptos_router` and tests implement in memory. This is what makes
//! the fetch cycle's URL side effect observable without a browser.

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(test)]
use mockall::automock;

use crate::paging::{PageQuery, query};

#[cfg(test)]
mod nav_test;

/// Read and write the current URL's query parameters. Can be mocked in
/// tests.
#[cfg_attr(test, automock)]
pub trait QueryNavigator {
    /// Current query parameters, in order of appearance.
    fn query(&self) -> Vec<(String, String)>;

    /// Merge `params` into the current query, preserving unrelated
    /// parameters, and navigate to the resulting URL as a normal
    /// forward (history-pushing) navigation.
    fn push_query(&self, params: &[(String, String)]);
}

/// Parse the initial page request from wherever the navigator points.
pub fn initial_query(nav: &dyn QueryNavigator, default_limit: usize) -> PageQuery {
    PageQuery::from_query(&nav.query(), default_limit)
}

/// Reflect a page request into the URL before fetching it.
pub fn sync_query(nav: &dyn QueryNavigator, query: PageQuery) {
    nav.push_query(&query.as_params());
}

/// In-memory [`QueryNavigator`] for tests.
///
/// Records every pushed URL so assertions can walk the navigation
/// history.
#[derive(Clone, Default)]
pub struct MemoryNavigator {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    pathname: String,
    search: String,
    pushes: Vec<String>,
}

impl MemoryNavigator {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                pathname: pathname.into(),
                search: search.into(),
                pushes: Vec::new(),
            })),
        }
    }

    /// Current query string, without a leading `?`.
    pub fn search(&self) -> String {
        self.inner.borrow().search.clone()
    }

    /// Every URL pushed so far, oldest first.
    pub fn pushes(&self) -> Vec<String> {
        self.inner.borrow().pushes.clone()
    }
}

impl QueryNavigator for MemoryNavigator {
    fn query(&self) -> Vec<(String, String)> {
        query::parse(&self.inner.borrow().search)
    }

    fn push_query(&self, params: &[(String, String)]) {
        let mut inner = self.inner.borrow_mut();
        inner.search = query::upsert(&inner.search, params);
        let url = if inner.search.is_empty() {
            inner.pathname.clone()
        } else {
            format!("{}?{}", inner.pathname, inner.search)
        };
        inner.pushes.push(url);
    }
}
