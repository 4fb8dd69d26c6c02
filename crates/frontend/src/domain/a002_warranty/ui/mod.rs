pub mod page;

pub use page::WarrantyLookup;
