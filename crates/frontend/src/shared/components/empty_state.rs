use crate::shared::icons::icon;
use leptos::prelude::*;

/// Explicit "no data" placeholder for lists and widgets without rows
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state__icon">{icon("inbox")}</span>
            <span class="empty-state__message">{message}</span>
        </div>
    }
}
