//! URL filters of the workforce dashboard

use crate::shared::url_state::{FilterSchema, FilterState};
use contracts::dashboards::d100_workforce_overview::DashboardQuery;

pub const START_DATE: &str = "startDate";
pub const END_DATE: &str = "endDate";
pub const BRANCH_ID: &str = "branchId";
pub const DEPARTMENT_ID: &str = "departmentId";

/// All dashboard filters are plain strings without defaults: an absent key
/// lets the report endpoint choose its own range and scope.
pub fn dashboard_filter_schema() -> FilterSchema {
    FilterSchema::new()
        .string(START_DATE)
        .string(END_DATE)
        .string(BRANCH_ID)
        .string(DEPARTMENT_ID)
}

/// Build a fresh query from the decoded filters
pub fn dashboard_query(state: &FilterState) -> DashboardQuery {
    DashboardQuery {
        start_date: state.get_string(START_DATE),
        end_date: state.get_string(END_DATE),
        branch_id: state.get_string(BRANCH_ID),
        department_id: state.get_string(DEPARTMENT_ID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_state::read_filters;

    #[test]
    fn test_query_from_url() {
        let state = read_filters(
            &dashboard_filter_schema(),
            "?startDate=2025-01-01&endDate=2025-01-07&departmentId=&other=1",
        );
        assert_eq!(
            dashboard_query(&state),
            DashboardQuery::for_period("2025-01-01", "2025-01-07")
        );
    }

    #[test]
    fn test_empty_url_is_empty_query() {
        let state = read_filters(&dashboard_filter_schema(), "");
        assert!(dashboard_query(&state).is_empty());
    }
}
