pub mod d100_workforce_overview;

pub use d100_workforce_overview::ui::WorkforceDashboard;
