pub mod bar_row;
pub mod date_input;
pub mod empty_state;
pub mod error_alert;
pub mod pagination_controls;
pub mod stat_card;

pub use bar_row::BarRow;
pub use date_input::DateInput;
pub use empty_state::EmptyState;
pub use error_alert::ErrorAlert;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatTone};
