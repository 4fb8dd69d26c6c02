pub mod api_utils;
pub mod bar_metrics;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod number_format;
pub mod query_cache;
pub mod url_state;
