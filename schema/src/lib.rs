//! Gather Schema
//!
//! GraphQL binding for a Gather session.
//!
//! - `QueryRoot` lists and fetches each collection
//! - `MutationRoot` exposes create/update/delete/deleteAll per collection
//! - Event and link relationships resolve lazily, one scan per requested field
//!
//! A failed lookup becomes a field error with the extension
//! `{ "code": "NOT_FOUND" }` on a nullable field, so the rest of the
//! response survives and callers can tell it apart from a real null.

mod context;
mod error;
mod execute;
mod input;
mod mutation;
mod object;
mod query;

pub use context::Context;
pub use error::{field_error, NOT_FOUND};
pub use execute::{execute, execute_with_variables};
pub use input::{AccountInput, EventInput, LinkInput, LocationInput};
pub use mutation::MutationRoot;
pub use object::{AccountNode, DeleteAllNode, EventNode, LinkNode, LocationNode};
pub use query::QueryRoot;

use juniper::{EmptySubscription, RootNode};

/// The Gather GraphQL schema.
pub type Schema = RootNode<'static, QueryRoot, MutationRoot, EmptySubscription<Context>>;

/// Build the schema.
pub fn schema() -> Schema {
    Schema::new(QueryRoot, MutationRoot, EmptySubscription::new())
}
