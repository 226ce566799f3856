use leptos::prelude::*;

use crate::paging::PageMeta;

/// Page sizes offered by [`PageSizeSelect`].
const PAGE_SIZES: [usize; 3] = [10, 25, 50];

#[component]
pub fn Pagination(
    meta: ReadSignal<PageMeta>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    #[prop(optional)] item_name: Option<String>,
) -> impl IntoView {
    let item_name = item_name.unwrap_or_else(|| "items".to_string());

    let summary = move || {
        let meta = meta.get();
        (meta.total > 0 && meta.limit > 0).then(|| {
            let first = meta.current_page.saturating_sub(1) * meta.limit + 1;
            let last = (first + meta.limit - 1).min(meta.total);
            format!(
                "Showing {} - {} of {} {}",
                first, last, meta.total, item_name
            )
        })
    };

    view! {
        <div>
            <div class="text-sm text-ctp-overlay0 mb-4">{summary}</div>

            <div class="flex justify-center items-center gap-2">
                <button
                    on:click=move |_| on_prev.run(())
                    disabled=move || meta.get().prev_page().is_none()
                    class="px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text disabled:opacity-50 disabled:cursor-not-allowed hover:border-ctp-blue"
                >
                    "← Previous"
                </button>

                <span class="text-ctp-subtext0">
                    {move || {
                        let meta = meta.get();
                        match meta.total_pages {
                            Some(pages) => format!("Page {} of {}", meta.current_page, pages),
                            None => format!("Page {}", meta.current_page),
                        }
                    }}
                </span>

                <button
                    on:click=move |_| on_next.run(())
                    disabled=move || meta.get().next_page().is_none()
                    class="px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text disabled:opacity-50 disabled:cursor-not-allowed hover:border-ctp-blue"
                >
                    "Next →"
                </button>
            </div>
        </div>
    }
}

/// Page-size selector; drives the hook's `change_limit`, which always
/// jumps back to page 1.
#[component]
pub fn PageSizeSelect(meta: ReadSignal<PageMeta>, on_change: Callback<usize>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-ctp-subtext0">
            "Per page"
            <select
                class="px-2 py-1 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text focus:outline-none focus:border-ctp-blue"
                on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<usize>() {
                        on_change.run(limit);
                    }
                }
            >
                {PAGE_SIZES
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || meta.get().limit == size
                            >
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
pub fn ErrorBanner(title: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="bg-ctp-red/10 border border-ctp-red rounded p-4 mb-6">
            <p class="text-ctp-red font-semibold">{title}</p>
            <p class="text-ctp-subtext0 text-sm mt-2">{message}</p>
        </div>
    }
}
