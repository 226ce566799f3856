//! Browser-backed navigator over `leptos_router`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::nav::QueryNavigator;
use crate::paging::query;

/// [`QueryNavigator`] over the real router.
///
/// Like the router hooks it wraps, this must be created inside a
/// component tree with a `Router` above it.
pub struct BrowserNavigator {
    pathname: Memo<String>,
    search: Memo<String>,
    navigate: Box<dyn Fn(String)>,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        let location = use_location();
        let navigate = use_navigate();
        Self {
            pathname: location.pathname,
            search: location.search,
            navigate: Box::new(move |url| navigate(&url, NavigateOptions::default())),
        }
    }
}

impl Default for BrowserNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryNavigator for BrowserNavigator {
    fn query(&self) -> Vec<(String, String)> {
        query::parse(&self.search.get_untracked())
    }

    fn push_query(&self, params: &[(String, String)]) {
        let search = query::upsert(&self.search.get_untracked(), params);
        let pathname = self.pathname.get_untracked();
        let url = if search.is_empty() {
            pathname
        } else {
            format!("{}?{}", pathname, search)
        };
        (self.navigate)(url);
    }
}
