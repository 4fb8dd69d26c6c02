use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays the date in the user's locale; values are yyyy-mm-dd
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format, empty when unset
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd or "")
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    view! {
        <label class="date-input">
            {label.map(|l| view! { <span class="date-input__label">{l}</span> })}
            <input
                type="date"
                class="date-input__field"
                prop:value=value
                on:change=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </label>
    }
}
