use leptos::prelude::*;

use crate::frontend::api;
use crate::frontend::components::{AuditTable, ErrorBanner, PageSizeSelect, Pagination};
use crate::frontend::hooks::{UseApiPaginationOptions, use_api_pagination};
use crate::frontend::nav::BrowserNavigator;

#[component]
pub fn Audit() -> impl IntoView {
    view! {
        <AuditList/>
    }
}

#[component]
fn AuditList() -> impl IntoView {
    let pager = use_api_pagination(
        BrowserNavigator::new(),
        api::audit::list,
        UseApiPaginationOptions { default_limit: 25 },
    );

    let refetch = pager.refetch;

    view! {
        <div class="container mx-auto p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-3xl font-bold text-ctp-text">"Audit Log"</h2>
                <div class="flex items-center gap-4">
                    <PageSizeSelect meta=pager.pagination on_change=pager.change_limit/>
                    <button
                        on:click=move |_| refetch.run(())
                        class="px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text hover:border-ctp-blue"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                pager
                    .error
                    .get()
                    .map(|message| {
                        view! { <ErrorBanner title="Error loading audit log" message/> }
                    })
            }}

            {move || {
                let events = pager.data.get();
                if events.is_empty() {
                    if pager.loading.get() {
                        view! { <p class="text-ctp-subtext0 mb-6">"Loading audit log..."</p> }
                            .into_any()
                    } else {
                        view! { <p class="text-ctp-subtext0 mb-6">"No audit events recorded."</p> }
                            .into_any()
                    }
                } else {
                    view! {
                        <div class="mb-6">
                            <AuditTable events/>
                        </div>
                    }
                        .into_any()
                }
            }}

            <Pagination
                meta=pager.pagination
                on_prev=pager.prev_page
                on_next=pager.next_page
                item_name="events".to_string()
            />
        </div>
    }
}
