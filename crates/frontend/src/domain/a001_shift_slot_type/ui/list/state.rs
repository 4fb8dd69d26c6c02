//! URL filters of the slot type list

use crate::shared::url_state::{FilterDescriptor, FilterKind, FilterSchema, FilterState};
use contracts::domain::a001_shift_slot_type::ShiftSlotTypeListQuery;

pub const PAGE: &str = "page";
pub const SEARCH: &str = "search";
pub const IS_ACTIVE: &str = "isActive";

pub fn list_filter_schema() -> FilterSchema {
    FilterSchema::new()
        .field(PAGE, FilterDescriptor::with_default(FilterKind::Number, 1.0))
        .string(SEARCH)
        .boolean(IS_ACTIVE)
}

/// Request for the decoded filters. Malformed or fractional pages fall back
/// to the nearest valid page.
pub fn list_query(state: &FilterState, page_size: u64) -> ShiftSlotTypeListQuery {
    let page = state
        .get_number(PAGE)
        .filter(|p| *p >= 1.0)
        .map(|p| p.trunc() as u64)
        .unwrap_or(1);

    ShiftSlotTypeListQuery {
        page,
        limit: page_size,
        search: state
            .get_str(SEARCH)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        is_active: state.get_bool(IS_ACTIVE),
    }
}

/// Status filter options: (label, value written to the URL)
pub const STATUS_OPTIONS: [(&str, Option<bool>); 3] = [
    ("All", None),
    ("Active", Some(true)),
    ("Inactive", Some(false)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_state::read_filters;

    fn query(search: &str) -> ShiftSlotTypeListQuery {
        list_query(&read_filters(&list_filter_schema(), search), 20)
    }

    #[test]
    fn test_defaults() {
        assert_eq!(query(""), ShiftSlotTypeListQuery::default());
    }

    #[test]
    fn test_query_from_url() {
        let q = query("?page=3&search=%20night%20&isActive=false");
        assert_eq!(q.page, 3);
        assert_eq!(q.search.as_deref(), Some("night"));
        assert_eq!(q.is_active, Some(false));
    }

    #[test]
    fn test_invalid_page_falls_back() {
        assert_eq!(query("?page=abc").page, 1);
        assert_eq!(query("?page=0").page, 1);
        assert_eq!(query("?page=2.7").page, 2);
    }
}
