use crate::shared::bar_metrics::width_style;
use leptos::prelude::*;

/// Labelled horizontal bar whose width is a precomputed percentage
#[component]
pub fn BarRow(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    /// 0..=100
    width: f64,
    #[prop(optional, into)] variant: Option<String>,
) -> impl IntoView {
    let fill_class = match variant {
        Some(v) => format!("bar-row__fill bar-row__fill--{}", v),
        None => "bar-row__fill".to_string(),
    };

    view! {
        <div class="bar-row">
            <span class="bar-row__label">{label}</span>
            <div class="bar-row__track">
                <div class=fill_class style=width_style(width)></div>
            </div>
            <span class="bar-row__value">{value}</span>
        </div>
    }
}
