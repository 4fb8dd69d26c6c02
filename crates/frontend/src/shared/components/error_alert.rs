use leptos::prelude::*;

/// Inline, recoverable error message with an optional retry action
#[component]
pub fn ErrorAlert(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-alert" role="alert">
            <span class="error-alert__icon">"⚠"</span>
            <span class="error-alert__message">{message}</span>
            {on_retry.map(|retry| view! {
                <button class="error-alert__retry" on:click=move |_| retry.run(())>
                    "Retry"
                </button>
            })}
        </div>
    }
}
