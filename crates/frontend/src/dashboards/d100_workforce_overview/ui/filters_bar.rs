use crate::dashboards::d100_workforce_overview::filters::{
    BRANCH_ID, DEPARTMENT_ID, END_DATE, START_DATE,
};
use crate::shared::components::DateInput;
use crate::shared::date_utils::QuickRange;
use crate::shared::icons::icon;
use crate::shared::url_state::{FilterValue, UrlFilters};
use chrono::Local;
use leptos::prelude::*;

/// Date range, quick presets and scope filters of the dashboard.
/// Every control writes straight to the URL.
#[component]
pub fn DashboardFiltersBar(filters: UrlFilters) -> impl IntoView {
    let state = filters.state();
    let text = move |key: &'static str| {
        Signal::derive(move || state.with(|s| s.get_string(key).unwrap_or_default()))
    };
    let start_date = text(START_DATE);
    let end_date = text(END_DATE);
    let branch_id = text(BRANCH_ID);
    let department_id = text(DEPARTMENT_ID);

    let write = move |key: &'static str, value: String| {
        filters.set(key, Some(FilterValue::Str(value.trim().to_string())));
    };

    let active_preset = move || {
        let today = Local::now().date_naive();
        state.with(|s| QuickRange::detect(s.get_str(START_DATE), s.get_str(END_DATE), today))
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel__dates">
                <DateInput label="From".to_string() value=start_date on_change=move |v| write(START_DATE, v) />
                <DateInput label="To".to_string() value=end_date on_change=move |v| write(END_DATE, v) />
                <div class="filter-panel__presets">
                    {QuickRange::ALL
                        .into_iter()
                        .map(|preset| {
                            let class = move || {
                                if active_preset() == Some(preset) {
                                    "preset-btn preset-btn--active"
                                } else {
                                    "preset-btn"
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    on:click=move |_| {
                                        let (start, end) = preset.range(Local::now().date_naive());
                                        filters.set_many(vec![
                                            (START_DATE.to_string(), Some(FilterValue::Str(start))),
                                            (END_DATE.to_string(), Some(FilterValue::Str(end))),
                                        ]);
                                    }
                                >
                                    {preset.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="filter-panel__scope">
                <input
                    type="text"
                    class="filter-panel__input"
                    placeholder="Branch ID"
                    prop:value=branch_id
                    on:change=move |ev| write(BRANCH_ID, event_target_value(&ev))
                />
                <input
                    type="text"
                    class="filter-panel__input"
                    placeholder="Department ID"
                    prop:value=department_id
                    on:change=move |ev| write(DEPARTMENT_ID, event_target_value(&ev))
                />
                <button
                    class="filter-panel__clear"
                    title="Clear filters"
                    disabled=move || state.with(|s| s.active_count() == 0)
                    on:click=move |_| filters.clear_all()
                >
                    {icon("x")}
                    " Clear"
                </button>
            </div>
        </div>
    }
}
