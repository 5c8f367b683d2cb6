//! Gather Record Store
//!
//! This crate provides the in-memory record storage:
//! - Table: one ordered collection of records, linear scan only
//! - Store: the four tables, owned explicitly and lent to executors
//! - Dataset: the seed format a store is built from

mod dataset;
mod error;
mod store;
mod table;

pub use dataset::Dataset;
pub use error::{StoreError, StoreResult};
pub use store::{HasTable, Store, StoreCounts};
pub use table::Table;
