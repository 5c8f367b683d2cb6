//! Gather Mutation
//!
//! Execute write operations (CREATE/UPDATE/DELETE/DELETE ALL).
//!
//! Responsibilities:
//! - Assign fresh identifiers on create
//! - Shallow-merge patches on update
//! - Match deletes by id or alternate key, first match wins
//! - Report how many records a bulk clear removed
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that coordinates operations
//! - `ops/` - Individual operation implementations (create, update, delete, clear)
//! - `target` - Delete targets (id and/or alternate key)
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

mod error;
mod executor;
mod ops;
mod result;
mod target;

pub use error::{MutationError, MutationResult};
pub use executor::MutationExecutor;
pub use result::DeleteAllSummary;
pub use target::DeleteTarget;
