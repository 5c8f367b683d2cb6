//! Gather REPL library - run GraphQL documents against an in-memory store.
//!
//! - `repl`: REPL state, document execution and the interactive loop
//! - `format`: response rendering and help text
//! - `error`: failures outside of GraphQL itself (I/O, dataset loading)

mod error;
mod format;
mod repl;

pub use error::{ReplError, ReplResult};
pub use format::{format_response, print_help};
pub use repl::Repl;
