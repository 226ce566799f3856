use leptos::prelude::*;

use crate::frontend::models::AuditEvent;

#[component]
pub fn AuditTable(events: Vec<AuditEvent>) -> impl IntoView {
    view! {
        <table class="w-full text-left text-sm text-ctp-text">
            <thead>
                <tr class="border-b border-ctp-surface1 text-ctp-subtext0">
                    <th class="px-3 py-2">"When"</th>
                    <th class="px-3 py-2">"Actor"</th>
                    <th class="px-3 py-2">"Action"</th>
                    <th class="px-3 py-2">"Target"</th>
                </tr>
            </thead>
            <tbody>
                {events
                    .into_iter()
                    .map(|event| view! { <AuditRow event/> })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn AuditRow(event: AuditEvent) -> impl IntoView {
    view! {
        <tr class="border-b border-ctp-surface0 hover:bg-ctp-surface0">
            <td class="px-3 py-2 text-ctp-subtext1">{event.created_at}</td>
            <td class="px-3 py-2 font-medium">{event.actor}</td>
            <td class="px-3 py-2">{event.action}</td>
            <td class="px-3 py-2 text-ctp-subtext1">
                {event.target.unwrap_or_else(|| "-".to_string())}
            </td>
        </tr>
    }
}
