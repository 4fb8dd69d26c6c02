pub mod dashboard;
pub mod filters_bar;
pub mod widgets;

pub use dashboard::WorkforceDashboard;
