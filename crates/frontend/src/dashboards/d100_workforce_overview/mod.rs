//! Workforce overview dashboard
//!
//! URL filters → [`DashboardQuery`](contracts::dashboards::d100_workforce_overview::DashboardQuery)
//! → cached report request → independent widgets.

pub mod api;
pub mod filters;
pub mod loader;
pub mod ui;
pub mod view_model;

#[cfg(test)]
mod tests {
    use super::filters::{dashboard_filter_schema, dashboard_query};
    use super::loader::DashboardLoader;
    use super::view_model::{shift_trend_bars, stat_cards};
    use crate::shared::api_utils::ApiError;
    use crate::shared::query_cache::CachePolicy;
    use crate::shared::url_state::read_filters;
    use contracts::dashboards::d100_workforce_overview::{DashboardQuery, DashboardResponse};
    use futures::executor::block_on;
    use serde_json::json;

    async fn mock_endpoint(query: DashboardQuery) -> Result<DashboardResponse, ApiError> {
        assert_eq!(query.start_date.as_deref(), Some("2025-01-01"));
        let body = json!({
            "stats": {
                "totalEmployees": 12,
                "activeEmployees": 10,
                "totalShifts": 42,
                "totalHours": 0,
                "attendanceRate": 95.5,
                "shiftUtilization": 80,
                "pendingLeaveRequests": 0,
                "pendingTasks": 0
            },
            "recentActivities": [],
            "topPerformers": [],
            "shiftTrends": [{ "date": "2025-01-01", "totalShifts": 10, "totalHours": 0 }],
            "departmentPerformance": [],
            "generatedAt": "2025-01-07T09:00:00Z"
        });
        Ok(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn test_url_to_rendered_widgets() {
        let state = read_filters(
            &dashboard_filter_schema(),
            "?startDate=2025-01-01&endDate=2025-01-07",
        );
        let loader = DashboardLoader::new(CachePolicy::default());
        let request = loader.request(dashboard_query(&state));

        let response = block_on(loader.resolve(request, mock_endpoint))
            .expect("latest request")
            .expect("mock response");

        let cards = stat_cards(&response.stats);
        let shifts = cards.iter().find(|c| c.label == "Total shifts").unwrap();
        assert_eq!(shifts.value, "42");

        let bars = shift_trend_bars(&response.shift_trends);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].shifts_width, 100.0);
        assert_eq!(bars[0].hours_width, 0.0);
    }
}
