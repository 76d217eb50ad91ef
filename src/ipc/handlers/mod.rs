pub mod core;
pub mod filter;
pub mod form;
pub mod records;
