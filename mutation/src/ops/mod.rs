//! Mutation operation implementations.
//!
//! Each operation (CREATE, UPDATE, DELETE, DELETE ALL) is implemented
//! in its own module for better organization and testability. All four are
//! generic over the record type, so every collection shares them.

mod clear;
mod create;
mod delete;
mod update;

pub use clear::execute_delete_all;
pub use create::execute_create;
pub use delete::execute_delete;
pub use update::execute_update;
