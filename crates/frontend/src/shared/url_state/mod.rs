//! URL-synchronized page filters
//!
//! Pages declare a [`FilterSchema`]; [`UrlStateStore`] keeps the decoded
//! filters in the query string and [`use_url_filters`] exposes them to
//! components through the router's location.

pub mod hook;
pub mod location;
pub mod query_string;
pub mod schema;
pub mod store;

pub use hook::{use_url_filters, LocationHandle, UrlFilters};
pub use location::{LocationService, NavigateOptions, RouterLocation};
pub use schema::{FilterDescriptor, FilterKind, FilterSchema, FilterState, FilterValue};
pub use store::{read_filters, UrlStateError, UrlStateStore};
