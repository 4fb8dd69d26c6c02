use crate::dashboards::d100_workforce_overview::loader::DashboardLoader;
use crate::dashboards::d100_workforce_overview::ui::WorkforceDashboard;
use crate::domain::a001_shift_slot_type::ui::ShiftSlotTypeList;
use crate::domain::a002_warranty::ui::WarrantyLookup;
use crate::layout::Shell;
use crate::shared::components::EmptyState;
use crate::shared::config::config;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let config = config();
    log::info!("API base URL: {}", config.api_base_url);

    // One report cache for the whole session, shared across page visits
    provide_context(DashboardLoader::new(config.dashboard_cache));

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <EmptyState message="Page not found" /> }>
                    <Route path=path!("/") view=WorkforceDashboard />
                    <Route path=path!("/shift-slot-types") view=ShiftSlotTypeList />
                    <Route path=path!("/warranty") view=WarrantyLookup />
                </Routes>
            </Shell>
        </Router>
    }
}
