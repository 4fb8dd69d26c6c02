use serde::{Deserialize, Serialize};

// ============================================================================
// Request
// ============================================================================

/// Parameters of `GET /reports/dashboard`.
///
/// Built fresh from the page filters on every change and never mutated
/// afterwards. Missing fields are omitted from the query string so the
/// backend applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Start date in format "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date in format "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
}

impl DashboardQuery {
    /// Query limited to a date range
    pub fn for_period(start_date: &str, end_date: &str) -> Self {
        Self {
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
            ..Self::default()
        }
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.branch_id.is_none()
            && self.department_id.is_none()
    }
}

// ============================================================================
// Response
// ============================================================================

/// Aggregated workforce metrics for one `DashboardQuery`.
///
/// Read-only snapshot: widgets derive presentation values from it but never
/// write back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_activities: Vec<RecentActivity>,
    pub top_performers: Vec<TopPerformer>,
    pub shift_trends: Vec<ShiftTrend>,
    pub department_performance: Vec<DepartmentPerformance>,
    /// ISO-8601 timestamp of the snapshot
    pub generated_at: String,
}

/// Headline counters shown in the stats summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub active_employees: u64,
    pub total_shifts: u64,
    pub total_hours: f64,
    /// Percentage, 0..=100
    pub attendance_rate: f64,
    /// Percentage, 0..=100
    pub shift_utilization: f64,
    pub pending_leave_requests: u64,
    pub pending_tasks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentActivity {
    pub id: String,
    /// Activity kind, e.g. "shift_assigned", "leave_requested"
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub user_name: Option<String>,
    /// ISO-8601 timestamp
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopPerformer {
    pub employee_id: String,
    pub employee_name: String,
    pub department_name: Option<String>,
    pub total_shifts: u64,
    pub total_hours: f64,
    pub attendance_rate: f64,
}

/// Shift volume for one day of the requested period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftTrend {
    /// Date in format "YYYY-MM-DD"
    pub date: String,
    pub total_shifts: u64,
    pub total_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentPerformance {
    pub department_id: String,
    pub department_name: String,
    pub total_employees: u64,
    pub total_shifts: u64,
    pub total_hours: f64,
    pub attendance_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_missing_fields() {
        let query = DashboardQuery::for_period("2025-01-01", "2025-01-07");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "startDate": "2025-01-01", "endDate": "2025-01-07" })
        );
        assert!(DashboardQuery::default().is_empty());
        assert!(!query.is_empty());
    }

    #[test]
    fn test_partial_response_uses_defaults() {
        let json = r#"{
            "stats": { "totalShifts": 42, "attendanceRate": 91.25 },
            "shiftTrends": [{ "date": "2025-01-01", "totalShifts": 10 }],
            "recentActivities": [{ "id": "a1", "type": "shift_assigned", "description": "x", "timestamp": "2025-01-01T08:00:00Z" }],
            "generatedAt": "2025-01-07T10:00:00Z"
        }"#;
        let response: DashboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.stats.total_shifts, 42);
        assert_eq!(response.stats.total_employees, 0);
        assert_eq!(response.shift_trends[0].total_hours, 0.0);
        assert_eq!(response.recent_activities[0].activity_type, "shift_assigned");
        assert!(response.top_performers.is_empty());
        assert!(response.department_performance.is_empty());
    }
}
