use super::filters_bar::DashboardFiltersBar;
use super::widgets::{
    DepartmentPerformanceCard, RecentActivitiesCard, ShiftTrendsCard, StatsSummary,
    TopPerformersCard,
};
use crate::dashboards::d100_workforce_overview::api;
use crate::dashboards::d100_workforce_overview::filters::{dashboard_filter_schema, dashboard_query};
use crate::dashboards::d100_workforce_overview::loader::DashboardLoader;
use crate::shared::api_utils::show_result;
use crate::shared::components::{EmptyState, ErrorAlert};
use crate::shared::config::config;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::url_state::use_url_filters;
use contracts::dashboards::d100_workforce_overview::{DashboardQuery, DashboardResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Workforce overview dashboard
#[component]
pub fn WorkforceDashboard() -> impl IntoView {
    let filters = use_url_filters(dashboard_filter_schema());
    let loader = StoredValue::new(
        use_context::<DashboardLoader>()
            .unwrap_or_else(|| DashboardLoader::new(config().dashboard_cache)),
    );

    // Data state
    let (data, set_data) = signal(None::<DashboardResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let query = Memo::new(move |_| filters.state().with(dashboard_query));

    let load = move |query: DashboardQuery| {
        let loader = loader.get_value();
        let request = loader.request(query);
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            // None: a newer filter combination owns the screen now
            if let Some(result) = loader.resolve(request, api::fetch_dashboard).await {
                show_result(result, set_data, set_error);
                set_loading.set(false);
            }
        });
    };

    // Load data when filters change
    Effect::new(move |_| load(query.get()));

    let refresh = move || {
        let current = query.get_untracked();
        loader.with_value(|l| l.invalidate(&current));
        load(current);
    };

    view! {
        <div id="d100_workforce_overview--dashboard" class="dashboard">
            <div class="dashboard__header">
                <h2 class="dashboard__title">"Workforce overview"</h2>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <DashboardFiltersBar filters=filters />

            {move || error.get().map(|err| view! {
                <ErrorAlert message=err on_retry=Callback::new(move |_| refresh()) />
            })}

            {move || loading.get().then(|| view! {
                <div class="dashboard__loading">
                    <Spinner />
                    "Loading..."
                </div>
            })}

            {move || match data.get() {
                Some(snapshot) => view! {
                    <StatsSummary stats=snapshot.stats.clone() />
                    <div class="dashboard__grid">
                        <ShiftTrendsCard trends=snapshot.shift_trends.clone() />
                        <DepartmentPerformanceCard departments=snapshot.department_performance.clone() />
                        <TopPerformersCard performers=snapshot.top_performers.clone() />
                        <RecentActivitiesCard activities=snapshot.recent_activities.clone() />
                    </div>
                    <div class="dashboard__footer">
                        {format!("Generated {}", format_date(&snapshot.generated_at))}
                    </div>
                }
                .into_any(),
                None if !loading.get() && error.get().is_none() => {
                    view! { <EmptyState message="No dashboard data" /> }.into_any()
                }
                None => view! { <></> }.into_any(),
            }}
        </div>
    }
}
