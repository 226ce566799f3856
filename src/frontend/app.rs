use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::frontend::pages::{Audit, Users};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <NavAndContent/>
        </Router>
    }
}

#[component]
fn NavAndContent() -> impl IntoView {
    let location = use_location();

    // Determine active tab based on current path
    let is_active = move |path: &str| {
        let current = location.pathname.get();
        if path == "/" {
            current == "/" || current.starts_with("/users")
        } else {
            current.starts_with(path)
        }
    };

    view! {
        <main class="min-h-screen bg-ctp-base flex flex-col">
            <nav class="bg-ctp-surface0 border-b border-ctp-surface1">
                <div class="container mx-auto flex justify-between items-center px-6 py-4">
                    <div class="flex items-center gap-2">
                        <h1 class="text-3xl font-bold bg-gradient-to-r from-ctp-mauve to-ctp-blue bg-clip-text text-transparent">
                            "roster"
                        </h1>
                        <span class="text-xs text-ctp-subtext0 font-mono">
                            {env!("CARGO_PKG_VERSION")}
                        </span>
                    </div>
                    <div class="flex gap-2 items-center">
                        <a href="/"
                            class="px-4 py-2 rounded-lg font-medium transition-colors"
                            class:bg-ctp-surface2=move || is_active("/")
                            class:text-ctp-text=move || is_active("/")
                            class:text-ctp-subtext1=move || !is_active("/")
                            class:hover:bg-ctp-surface1=move || !is_active("/")
                            class:hover:text-ctp-text=move || !is_active("/")>
                            "Users"
                        </a>
                        <a href="/audit"
                            class="px-4 py-2 rounded-lg font-medium transition-colors"
                            class:bg-ctp-surface2=move || is_active("/audit")
                            class:text-ctp-text=move || is_active("/audit")
                            class:text-ctp-subtext1=move || !is_active("/audit")
                            class:hover:bg-ctp-surface1=move || !is_active("/audit")
                            class:hover:text-ctp-text=move || !is_active("/audit")>
                            "Audit Log"
                        </a>
                    </div>
                </div>
            </nav>

            <div class="flex-1">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=Users/>
                    <Route path=path!("/users") view=Users/>
                    <Route path=path!("/audit") view=Audit/>
                </Routes>
            </div>

            <footer class="py-6 px-6 border-t border-ctp-surface1 bg-ctp-surface0">
                <div class="container mx-auto text-center text-sm text-ctp-subtext0">
                    <p class="text-xs text-ctp-overlay0">
                        "roster v" {env!("CARGO_PKG_VERSION")}
                    </p>
                </div>
            </footer>
        </main>
    }
}
