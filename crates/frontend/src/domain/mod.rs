pub mod a001_shift_slot_type;
pub mod a002_warranty;
