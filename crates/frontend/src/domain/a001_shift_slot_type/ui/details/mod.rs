pub mod form;
pub mod view;
pub mod view_model;

pub use view::ShiftSlotTypeDetails;
