use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::nav::{self, QueryNavigator};
use crate::paging::{DEFAULT_LIMIT, PageFeed, PageMeta, PageQuery};

/// Error text shown when a failed fetch renders to an empty message.
const GENERIC_FETCH_ERROR: &str = "Something went wrong";

type BoxedFetch<T> =
    Rc<dyn Fn(PageQuery) -> Pin<Box<dyn Future<Output = Result<PageFeed<T>, String>>>>>;

/// Options for [`use_api_pagination`].
#[derive(Debug, Clone, Copy)]
pub struct UseApiPaginationOptions {
    /// Page size used when the URL does not carry a `limit` parameter.
    pub default_limit: usize,
}

impl Default for UseApiPaginationOptions {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

/// Return type for use_api_pagination hook
pub struct UseApiPaginationReturn<T: Send + Sync + 'static> {
    /// Items of the most recently fetched page. Replaced wholesale on
    /// every successful fetch; kept as-is when a fetch fails.
    pub data: ReadSignal<Vec<T>>,
    /// Metadata of the most recently fetched page.
    pub pagination: ReadSignal<PageMeta>,
    /// True from the moment an operation starts until its fetch
    /// settles.
    pub loading: ReadSignal<bool>,
    /// Message of the most recent failed fetch, cleared when a new
    /// fetch starts.
    pub error: ReadSignal<Option<String>>,
    /// Fetch the given page at the current limit. Not bounds-checked:
    /// the backend decides what an out-of-range page returns.
    pub go_to_page: Callback<usize>,
    /// Fetch the next page; no-op on the last known page.
    pub next_page: Callback<()>,
    /// Fetch the previous page; no-op on page 1.
    pub prev_page: Callback<()>,
    /// Fetch page 1 at a new page size.
    pub change_limit: Callback<usize>,
    /// Re-issue the fetch for the current page and limit.
    pub refetch: Callback<()>,
}

/// Hook for driving a paginated list endpoint from the URL bar.
///
/// Reads `page`/`limit` from the navigator's query once at creation and
/// issues the initial fetch with them; every later operation writes the
/// requested `page`/`limit` back into the query (preserving unrelated
/// parameters, pushing a history entry) before calling `fetch`.
/// Completions of superseded fetches are discarded, so rapid navigation
/// cannot clobber newer state.
///
/// # Example
/// ```rust,ignore
/// let pager = use_api_pagination(
///     BrowserNavigator::new(),
///     |query| api::users::list(query, None),
///     UseApiPaginationOptions::default(),
/// );
///
/// view! {
///     <UserTable users=pager.data.get()/>
///     <Pagination
///         meta=pager.pagination
///         on_prev=pager.prev_page
///         on_next=pager.next_page
///     />
/// }
/// ```
pub fn use_api_pagination<T, F, Fut, E>(
    navigator: impl QueryNavigator + 'static,
    fetch: F,
    options: UseApiPaginationOptions,
) -> UseApiPaginationReturn<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(PageQuery) -> Fut + 'static,
    Fut: Future<Output = Result<PageFeed<T>, E>> + 'static,
    E: std::fmt::Display,
{
    let initial = nav::initial_query(&navigator, options.default_limit);

    let (data, set_data) = signal(Vec::<T>::new());
    let (pagination, set_pagination) = signal(PageMeta::initial(initial));
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let fetch: BoxedFetch<T> = Rc::new(move |query| {
        let fut = fetch(query);
        Box::pin(async move {
            fut.await.map_err(|err| {
                let message = err.to_string();
                if message.is_empty() {
                    GENERIC_FETCH_ERROR.to_string()
                } else {
                    message
                }
            })
        })
    });
    let fetch = StoredValue::new_local(fetch);

    let navigator: Rc<dyn QueryNavigator> = Rc::new(navigator);
    let navigator = StoredValue::new_local(navigator);

    // Ticket of the most recently started fetch; completions holding an
    // older ticket are stale and must not write state.
    let generation = StoredValue::new(0u64);

    let load = move |query: PageQuery| {
        let ticket = generation.get_value() + 1;
        generation.set_value(ticket);

        set_loading.set(true);
        set_error.set(None);

        navigator.with_value(|navigator| nav::sync_query(navigator.as_ref(), query));

        web_sys::console::log_1(
            &format!("fetching page {} (limit {})", query.page, query.limit).into(),
        );

        let fut = fetch.with_value(|fetch| fetch(query));
        spawn_local(async move {
            let outcome = fut.await;

            // A newer fetch took over, or the owner was disposed.
            if generation.try_get_value() != Some(ticket) {
                return;
            }

            match outcome {
                Ok(feed) => {
                    set_data.set(feed.data);
                    set_pagination.set(feed.pagination.normalized());
                }
                Err(message) => {
                    web_sys::console::error_1(&format!("fetch failed: {}", message).into());
                    set_error.set(Some(message));
                }
            }
            set_loading.set(false);
        });
    };

    // Initial load, exactly once, after mount; navigating during the
    // first render would race the router.
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            load(initial);
        }
    });

    UseApiPaginationReturn {
        data,
        pagination,
        loading,
        error,
        go_to_page: Callback::new(move |page: usize| {
            load(PageQuery {
                page,
                limit: pagination.get().limit,
            });
        }),
        next_page: Callback::new(move |_| {
            let meta = pagination.get();
            if let Some(page) = meta.next_page() {
                load(PageQuery {
                    page,
                    limit: meta.limit,
                });
            }
        }),
        prev_page: Callback::new(move |_| {
            let meta = pagination.get();
            if let Some(page) = meta.prev_page() {
                load(PageQuery {
                    page,
                    limit: meta.limit,
                });
            }
        }),
        change_limit: Callback::new(move |limit: usize| {
            load(PageQuery { page: 1, limit });
        }),
        refetch: Callback::new(move |_| {
            load(pagination.get().query());
        }),
    }
}
