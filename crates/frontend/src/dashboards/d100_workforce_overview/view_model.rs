//! Presentation values derived from a dashboard snapshot
//!
//! Each widget gets its own pure transform over the part of the response it
//! shows. Nothing here writes back to the response.

use crate::shared::bar_metrics::bar_widths_by;
use crate::shared::components::StatTone;
use crate::shared::date_utils::{format_day_label, format_relative_time};
use crate::shared::number_format::{format_hours, format_number_int, format_percent};
use chrono::{DateTime, Utc};
use contracts::dashboards::d100_workforce_overview::{
    DashboardStats, DepartmentPerformance, RecentActivity, ShiftTrend, TopPerformer,
};

/// Attendance below this rate is highlighted
const ATTENDANCE_WARNING_RATE: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardModel {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
    pub tone: StatTone,
}

pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCardModel> {
    let attendance_tone = if stats.attendance_rate < ATTENDANCE_WARNING_RATE {
        StatTone::Warning
    } else {
        StatTone::Good
    };

    vec![
        StatCardModel {
            label: "Employees",
            icon: "users",
            value: format_number_int(stats.total_employees as f64),
            subtitle: Some(format!("{} active", stats.active_employees)),
            tone: StatTone::Neutral,
        },
        StatCardModel {
            label: "Total shifts",
            icon: "calendar",
            value: format_number_int(stats.total_shifts as f64),
            subtitle: None,
            tone: StatTone::Neutral,
        },
        StatCardModel {
            label: "Total hours",
            icon: "clock",
            value: format_hours(stats.total_hours),
            subtitle: None,
            tone: StatTone::Neutral,
        },
        StatCardModel {
            label: "Attendance rate",
            icon: "user-check",
            value: format_percent(stats.attendance_rate),
            subtitle: None,
            tone: attendance_tone,
        },
        StatCardModel {
            label: "Shift utilization",
            icon: "percent",
            value: format_percent(stats.shift_utilization),
            subtitle: None,
            tone: StatTone::Neutral,
        },
        StatCardModel {
            label: "Pending requests",
            icon: "tasks",
            value: format_number_int((stats.pending_leave_requests + stats.pending_tasks) as f64),
            subtitle: Some(format!(
                "{} leave, {} tasks",
                stats.pending_leave_requests, stats.pending_tasks
            )),
            tone: if stats.pending_leave_requests + stats.pending_tasks > 0 {
                StatTone::Warning
            } else {
                StatTone::Neutral
            },
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendBarModel {
    pub label: String,
    pub shifts: String,
    pub hours: String,
    pub shifts_width: f64,
    pub hours_width: f64,
}

/// Two bars per day: shift count and hours, each relative to its own maximum
pub fn shift_trend_bars(trends: &[ShiftTrend]) -> Vec<TrendBarModel> {
    let shift_widths = bar_widths_by(trends, |t| t.total_shifts as f64);
    let hour_widths = bar_widths_by(trends, |t| t.total_hours);

    trends
        .iter()
        .zip(shift_widths)
        .zip(hour_widths)
        .map(|((trend, shifts_width), hours_width)| TrendBarModel {
            label: format_day_label(&trend.date),
            shifts: format_number_int(trend.total_shifts as f64),
            hours: format_hours(trend.total_hours),
            shifts_width,
            hours_width,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentBarModel {
    pub name: String,
    pub employees: String,
    pub shifts: String,
    pub attendance: String,
    pub shifts_width: f64,
    pub low_attendance: bool,
}

pub fn department_bars(departments: &[DepartmentPerformance]) -> Vec<DepartmentBarModel> {
    let widths = bar_widths_by(departments, |d| d.total_shifts as f64);

    departments
        .iter()
        .zip(widths)
        .map(|(dept, shifts_width)| DepartmentBarModel {
            name: dept.department_name.clone(),
            employees: format_number_int(dept.total_employees as f64),
            shifts: format_number_int(dept.total_shifts as f64),
            attendance: format_percent(dept.attendance_rate),
            shifts_width,
            low_attendance: dept.attendance_rate < ATTENDANCE_WARNING_RATE,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformerRowModel {
    pub rank: usize,
    pub name: String,
    pub department: String,
    pub shifts: String,
    pub hours: String,
    pub attendance: String,
    pub hours_width: f64,
}

/// Rows in the order received; rank is the 1-based position
pub fn performer_rows(performers: &[TopPerformer]) -> Vec<PerformerRowModel> {
    let widths = bar_widths_by(performers, |p| p.total_hours);

    performers
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (performer, hours_width))| PerformerRowModel {
            rank: index + 1,
            name: performer.employee_name.clone(),
            department: performer
                .department_name
                .clone()
                .unwrap_or_else(|| "—".to_string()),
            shifts: format_number_int(performer.total_shifts as f64),
            hours: format_hours(performer.total_hours),
            attendance: format_percent(performer.attendance_rate),
            hours_width,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRowModel {
    pub id: String,
    pub icon: &'static str,
    pub description: String,
    pub user: Option<String>,
    pub when: String,
}

pub fn activity_rows(activities: &[RecentActivity], now: DateTime<Utc>) -> Vec<ActivityRowModel> {
    activities
        .iter()
        .map(|activity| ActivityRowModel {
            id: activity.id.clone(),
            icon: activity_icon(&activity.activity_type),
            description: activity.description.clone(),
            user: activity.user_name.clone(),
            when: format_relative_time(&activity.timestamp, now),
        })
        .collect()
}

fn activity_icon(activity_type: &str) -> &'static str {
    match activity_type {
        t if t.starts_with("shift") => "calendar",
        t if t.starts_with("leave") => "inbox",
        t if t.starts_with("task") => "tasks",
        t if t.starts_with("employee") => "users",
        _ => "activity",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn trend(date: &str, shifts: u64, hours: f64) -> ShiftTrend {
        ShiftTrend {
            date: date.into(),
            total_shifts: shifts,
            total_hours: hours,
        }
    }

    #[test]
    fn test_stat_cards_format_values() {
        let stats = DashboardStats {
            total_employees: 1250,
            active_employees: 1200,
            total_shifts: 42,
            total_hours: 336.0,
            attendance_rate: 76.44,
            shift_utilization: 90.0,
            pending_leave_requests: 2,
            pending_tasks: 1,
        };
        let cards = stat_cards(&stats);
        let value = |label: &str| cards.iter().find(|c| c.label == label).unwrap().clone();

        assert_eq!(value("Employees").value, "1,250");
        assert_eq!(value("Total shifts").value, "42");
        assert_eq!(value("Total hours").value, "336.0h");
        assert_eq!(value("Attendance rate").value, "76.4%");
        assert_eq!(value("Attendance rate").tone, StatTone::Warning);
        assert_eq!(value("Shift utilization").value, "90.0%");
        assert_eq!(value("Pending requests").value, "3");
    }

    #[test]
    fn test_trend_bars_use_independent_maxima() {
        let bars = shift_trend_bars(&[
            trend("2025-01-01", 0, 8.0),
            trend("2025-01-02", 5, 16.0),
            trend("2025-01-03", 10, 4.0),
        ]);
        let shift_widths: Vec<f64> = bars.iter().map(|b| b.shifts_width).collect();
        let hour_widths: Vec<f64> = bars.iter().map(|b| b.hours_width).collect();
        assert_eq!(shift_widths, vec![0.0, 50.0, 100.0]);
        assert_eq!(hour_widths, vec![50.0, 100.0, 25.0]);
        assert_eq!(bars[0].label, "01/01");
    }

    #[test]
    fn test_all_zero_trends_have_zero_width() {
        let bars = shift_trend_bars(&[trend("2025-01-01", 0, 0.0), trend("2025-01-02", 0, 0.0)]);
        assert!(bars.iter().all(|b| b.shifts_width == 0.0 && b.hours_width == 0.0));
        assert!(shift_trend_bars(&[]).is_empty());
    }

    #[test]
    fn test_department_and_performer_rows() {
        let departments = department_bars(&[
            DepartmentPerformance {
                department_name: "Kitchen".into(),
                total_shifts: 30,
                attendance_rate: 95.0,
                ..Default::default()
            },
            DepartmentPerformance {
                department_name: "Front desk".into(),
                total_shifts: 15,
                attendance_rate: 70.24,
                ..Default::default()
            },
        ]);
        assert_eq!(departments[1].shifts_width, 50.0);
        assert_eq!(departments[1].attendance, "70.2%");
        assert!(departments[1].low_attendance);

        let performers = performer_rows(&[
            TopPerformer {
                employee_name: "Lan".into(),
                total_hours: 40.0,
                ..Default::default()
            },
            TopPerformer {
                employee_name: "Minh".into(),
                department_name: Some("Kitchen".into()),
                total_hours: 10.0,
                ..Default::default()
            },
        ]);
        assert_eq!(performers[0].rank, 1);
        assert_eq!(performers[0].department, "—");
        assert_eq!(performers[1].hours_width, 25.0);
    }

    #[test]
    fn test_activity_rows_use_relative_time() {
        let now = Utc.with_ymd_and_hms(2025, 1, 7, 12, 0, 0).unwrap();
        let rows = activity_rows(
            &[RecentActivity {
                id: "a1".into(),
                activity_type: "leave_requested".into(),
                description: "Leave requested".into(),
                user_name: Some("Hoa".into()),
                timestamp: "2025-01-07T07:00:00Z".into(),
            }],
            now,
        );
        assert_eq!(rows[0].when, "5 hours ago");
        assert_eq!(rows[0].icon, "inbox");
    }
}
