//! Gather Session
//!
//! A session owns the record store and the id source, and is the single
//! entry point for every query and mutation.
//!
//! Operations run one at a time to completion. A session is not internally
//! synchronized: `execute` and `run` take `&mut self`, and anything that shares a
//! session between callers must serialize access to it.

mod error;
mod operation;
mod result;
mod session;

pub use error::{SessionError, SessionResult};
pub use operation::{Mutation, Operation, Query};
pub use result::{FromOutcome, Outcome};
pub use session::Session;

pub use gather_mutation::{DeleteAllSummary, DeleteTarget};
