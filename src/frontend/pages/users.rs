use leptos::prelude::*;

use crate::frontend::api;
use crate::frontend::components::{ErrorBanner, PageSizeSelect, Pagination, UserTable};
use crate::frontend::hooks::{UseApiPaginationOptions, use_api_pagination};
use crate::frontend::nav::BrowserNavigator;

#[component]
pub fn Users() -> impl IntoView {
    view! {
        <UsersList/>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let (filter, set_filter) = signal(String::new());

    let pager = use_api_pagination(
        BrowserNavigator::new(),
        move |query| {
            let term = filter.get_untracked();
            let term = (!term.trim().is_empty()).then_some(term);
            api::users::list(query, term)
        },
        UseApiPaginationOptions::default(),
    );

    let go_to_page = pager.go_to_page;
    // A changed filter restarts from the first page.
    let on_filter = move |ev: web_sys::Event| {
        set_filter.set(event_target_value(&ev));
        go_to_page.run(1);
    };

    view! {
        <div class="container mx-auto p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-3xl font-bold text-ctp-text">"Users"</h2>
                <PageSizeSelect meta=pager.pagination on_change=pager.change_limit/>
            </div>

            <div class="mb-6">
                <input
                    type="text"
                    placeholder="Filter by name or email..."
                    prop:value=move || filter.get()
                    on:input=on_filter
                    class="w-full px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded-lg text-ctp-text placeholder-ctp-overlay0 focus:outline-none focus:border-ctp-blue"
                />
            </div>

            {move || {
                pager
                    .error
                    .get()
                    .map(|message| view! { <ErrorBanner title="Error loading users" message/> })
            }}

            {move || {
                let users = pager.data.get();
                if users.is_empty() {
                    if pager.loading.get() {
                        view! { <p class="text-ctp-subtext0 mb-6">"Loading users..."</p> }
                            .into_any()
                    } else {
                        view! { <p class="text-ctp-subtext0 mb-6">"No users found."</p> }
                            .into_any()
                    }
                } else {
                    view! {
                        <div class="mb-6">
                            <UserTable users/>
                        </div>
                    }
                        .into_any()
                }
            }}

            <Pagination
                meta=pager.pagination
                on_prev=pager.prev_page
                on_next=pager.next_page
                item_name="users".to_string()
            />
        </div>
    }
}
