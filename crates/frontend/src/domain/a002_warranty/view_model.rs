use crate::domain::a002_warranty::api::lookup_request;
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_number_int;
use contracts::domain::a002_warranty::{InvoiceItem, WarrantyInfo, WarrantyStatus};

/// "12 days left", "Expires today", "Expired 3 days ago"
pub fn remaining_label(info: &WarrantyInfo) -> String {
    match info.remaining_days {
        0 => "Expires today".to_string(),
        1 => "1 day left".to_string(),
        d if d > 1 => format!("{} days left", d),
        -1 => "Expired 1 day ago".to_string(),
        d => format!("Expired {} days ago", -d),
    }
}

/// Status as shown; a negative remaining period wins over a stale status
pub fn effective_status(info: &WarrantyInfo) -> WarrantyStatus {
    if info.remaining_days < 0 {
        WarrantyStatus::Expired
    } else {
        info.status
    }
}

pub fn period_label(info: &WarrantyInfo) -> Option<String> {
    match (&info.warranty_start_date, &info.warranty_end_date) {
        (Some(start), Some(end)) => Some(format!("{} – {}", format_date(start), format_date(end))),
        (None, Some(end)) => Some(format!("until {}", format_date(end))),
        _ => None,
    }
}

/// Price times quantity, without decimals
pub fn line_total(item: &InvoiceItem) -> String {
    format_number_int(item.price * item.quantity)
}

/// What submitting the lookup form does
#[derive(Debug, Clone, PartialEq)]
pub enum LookupSubmit {
    /// New term, written to the URL
    Search(String),
    /// Same term as the URL; the lookup runs again
    Repeat,
}

pub fn submit_action(current: Option<&str>, input: &str) -> Result<LookupSubmit, ApiError> {
    let request = lookup_request(input)?;
    if current == Some(request.phone_or_serial.as_str()) {
        Ok(LookupSubmit::Repeat)
    } else {
        Ok(LookupSubmit::Search(request.phone_or_serial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resubmitting_same_term_repeats_lookup() {
        assert_eq!(submit_action(Some("SN1"), " SN1 "), Ok(LookupSubmit::Repeat));
        assert_eq!(
            submit_action(Some("SN1"), "0901234567"),
            Ok(LookupSubmit::Search("0901234567".into()))
        );
        assert_eq!(submit_action(None, "SN1"), Ok(LookupSubmit::Search("SN1".into())));
        assert!(matches!(submit_action(Some("SN1"), "  "), Err(ApiError::Validation(_))));
    }

    fn info(remaining_days: i64) -> WarrantyInfo {
        WarrantyInfo {
            status: WarrantyStatus::Active,
            warranty_days: 365,
            remaining_days,
            ..Default::default()
        }
    }

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(&info(120)), "120 days left");
        assert_eq!(remaining_label(&info(1)), "1 day left");
        assert_eq!(remaining_label(&info(0)), "Expires today");
        assert_eq!(remaining_label(&info(-1)), "Expired 1 day ago");
        assert_eq!(remaining_label(&info(-30)), "Expired 30 days ago");
    }

    #[test]
    fn test_negative_remaining_is_expired() {
        assert_eq!(effective_status(&info(-2)), WarrantyStatus::Expired);
        assert_eq!(effective_status(&info(2)), WarrantyStatus::Active);
    }

    #[test]
    fn test_period_label() {
        let mut warranty = info(10);
        assert_eq!(period_label(&warranty), None);
        warranty.warranty_start_date = Some("2024-06-01".into());
        warranty.warranty_end_date = Some("2025-06-01".into());
        assert_eq!(
            period_label(&warranty).as_deref(),
            Some("01/06/2024 – 01/06/2025")
        );
    }

    #[test]
    fn test_line_total() {
        let item = InvoiceItem {
            quantity: 2.0,
            price: 1_250_000.0,
            ..Default::default()
        };
        assert_eq!(line_total(&item), "2,500,000");
    }
}
