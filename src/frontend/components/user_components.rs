use leptos::prelude::*;

use crate::frontend::models::{Role, User};

fn role_classes(role: Role) -> &'static str {
    match role {
        Role::Admin => "bg-ctp-red/20 text-ctp-red",
        Role::Manager => "bg-ctp-yellow/20 text-ctp-yellow",
        Role::Member => "bg-ctp-blue/20 text-ctp-blue",
    }
}

#[component]
pub fn UserTable(users: Vec<User>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm text-ctp-text">
            <thead>
                <tr class="border-b border-ctp-surface1 text-ctp-subtext0">
                    <th class="px-3 py-2">"Name"</th>
                    <th class="px-3 py-2">"Email"</th>
                    <th class="px-3 py-2">"Role"</th>
                    <th class="px-3 py-2">"Status"</th>
                    <th class="px-3 py-2">"Joined"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| view! { <UserRow user/> })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    let status = if user.active {
        view! { <span class="text-ctp-green">"active"</span> }.into_any()
    } else {
        view! { <span class="text-ctp-overlay0">"disabled"</span> }.into_any()
    };

    view! {
        <tr class="border-b border-ctp-surface0 hover:bg-ctp-surface0">
            <td class="px-3 py-2 font-medium">{user.name}</td>
            <td class="px-3 py-2 text-ctp-subtext1">{user.email}</td>
            <td class="px-3 py-2">
                <span class=format!("px-2 py-0.5 rounded text-xs {}", role_classes(user.role))>
                    {user.role.to_string()}
                </span>
            </td>
            <td class="px-3 py-2">{status}</td>
            <td class="px-3 py-2 text-ctp-subtext1">{user.created_at}</td>
        </tr>
    }
}
