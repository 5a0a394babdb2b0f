//! Aggregates - Cluster of domain objects treated as a single unit

pub mod tip_table;

pub use tip_table::TipTable;
