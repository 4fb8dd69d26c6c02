/// Utilities for date and time formatting
///
/// Provides consistent date/time presentation across the dashboard pages
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2025-01-07" or "2025-01-07T14:02:26Z" -> "07/01/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Short axis label for trend charts
/// Example: "2025-01-07" -> "07/01"
pub fn format_day_label(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Human readable age of an ISO timestamp relative to `now`.
///
/// Whole hours are counted: under one hour is "just now", under a day is
/// "{h} hours ago", otherwise "{d} days ago". Timestamps in the future
/// (clock skew) are "just now"; unparsable input is returned as is.
pub fn format_relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(at) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };
    let hours = (now - at.with_timezone(&Utc)).num_hours();
    if hours < 1 {
        "just now".to_string()
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else {
        format!("{} days ago", hours / 24)
    }
}

/// Quick date range presets offered next to the date inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    Last7Days,
    Last30Days,
    ThisMonth,
}

impl QuickRange {
    pub const ALL: [QuickRange; 3] = [
        QuickRange::Last7Days,
        QuickRange::Last30Days,
        QuickRange::ThisMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickRange::Last7Days => "7 days",
            QuickRange::Last30Days => "30 days",
            QuickRange::ThisMonth => "This month",
        }
    }

    /// `(start, end)` as "YYYY-MM-DD", both inclusive, ending at `today`
    pub fn range(&self, today: NaiveDate) -> (String, String) {
        let start = match self {
            QuickRange::Last7Days => today - Duration::days(6),
            QuickRange::Last30Days => today - Duration::days(29),
            QuickRange::ThisMonth => today.with_day(1).unwrap_or(today),
        };
        (iso_date(start), iso_date(today))
    }

    /// Preset whose freshly computed range equals the given dates.
    ///
    /// Plain string comparison against ranges recomputed from `today`; a range
    /// chosen yesterday no longer matches after midnight.
    pub fn detect(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Option<QuickRange> {
        let (start, end) = (start?, end?);
        QuickRange::ALL.into_iter().find(|preset| {
            let (s, e) = preset.range(today);
            s == start && e == end
        })
    }
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
