//! Persistence adapters
//!
//! The only stored data is the read-only reference tip table.

mod tip_table_csv;

pub use tip_table_csv::load_tip_table;
