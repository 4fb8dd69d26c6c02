use crate::shared::api_utils::{api_url, auth_header, read_json, ApiError};
use contracts::dashboards::d100_workforce_overview::{DashboardQuery, DashboardResponse};
use gloo_net::http::Request;

const API_PATH: &str = "/reports/dashboard";

/// Path and query string of the report request
pub fn dashboard_path(query: &DashboardQuery) -> Result<String, ApiError> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| ApiError::Serialize(e.to_string()))?;
    if query_string.is_empty() {
        Ok(API_PATH.to_string())
    } else {
        Ok(format!("{}?{}", API_PATH, query_string))
    }
}

/// Fetch the workforce summary for a query
pub async fn fetch_dashboard(query: DashboardQuery) -> Result<DashboardResponse, ApiError> {
    let url = api_url(&dashboard_path(&query)?);

    let response = Request::get(&url)
        .header("Authorization", &auth_header()?)
        .send()
        .await?;

    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_path_omits_empty_fields() {
        let query = DashboardQuery::for_period("2025-01-01", "2025-01-07");
        assert_eq!(
            dashboard_path(&query).unwrap(),
            "/reports/dashboard?startDate=2025-01-01&endDate=2025-01-07"
        );
        assert_eq!(
            dashboard_path(&DashboardQuery::default()).unwrap(),
            "/reports/dashboard"
        );
    }

    #[test]
    fn test_dashboard_path_includes_scope() {
        let query = DashboardQuery {
            branch_id: Some("b-1".into()),
            department_id: Some("d 2".into()),
            ..Default::default()
        };
        let path = dashboard_path(&query).unwrap();
        assert!(path.starts_with("/reports/dashboard?branchId=b-1&departmentId="));
    }
}
