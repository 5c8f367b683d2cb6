//! Gather Query
//!
//! Read operations over the record store.
//!
//! Responsibilities:
//! - List a collection in insertion order
//! - Look up a single record by id
//! - Resolve event and link relationships by foreign key
//!
//! Every lookup is a linear scan. Nothing here mutates the store, and a
//! failed lookup is reported as `QueryError::NotFound`, never as a fault.

mod error;
mod executor;
mod relation;

pub use error::{QueryError, QueryResult};
pub use executor::QueryExecutor;
pub use relation::RelationResolver;
