pub mod limit;
pub mod listing;
