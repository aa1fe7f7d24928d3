//! Export module
//!
//! CSV export of admin listings.

pub mod csv;

pub use csv::{write_users_csv, write_stock_csv};
