//! Mutation executor - coordinates mutation operations.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/create.rs` - CREATE (id assignment and append)
//! - `ops/update.rs` - UPDATE (shallow merge in place)
//! - `ops/delete.rs` - DELETE (id or alternate key, first match)
//! - `ops/clear.rs` - DELETE ALL (bulk clear with count)

use gather_core::{IdSource, Record, RecordId};
use gather_store::{HasTable, Store};

use crate::error::MutationResult;
use crate::ops;
use crate::result::DeleteAllSummary;
use crate::target::DeleteTarget;

/// Mutation executor.
///
/// Holds exclusive borrows of the store and the id source for the duration
/// of one or more operations.
pub struct MutationExecutor<'s, 'i> {
    store: &'s mut Store,
    ids: &'i mut dyn IdSource,
}

impl<'s, 'i> MutationExecutor<'s, 'i> {
    /// Create a new executor.
    pub fn new(store: &'s mut Store, ids: &'i mut dyn IdSource) -> Self {
        Self { store, ids }
    }

    /// Execute a CREATE.
    pub fn create<R>(&mut self, fields: R::Patch) -> R
    where
        R: Record,
        Store: HasTable<R>,
    {
        ops::execute_create::<R>(self.store, self.ids, fields)
    }

    /// Execute an UPDATE.
    pub fn update<R>(&mut self, id: &RecordId, patch: R::Patch) -> MutationResult<R>
    where
        R: Record,
        Store: HasTable<R>,
    {
        ops::execute_update::<R>(self.store, id, patch)
    }

    /// Execute a DELETE.
    pub fn delete<R>(&mut self, target: &DeleteTarget<R::Key>) -> MutationResult<R>
    where
        R: Record,
        Store: HasTable<R>,
    {
        ops::execute_delete::<R>(self.store, target)
    }

    /// Execute a DELETE ALL.
    pub fn delete_all<R>(&mut self) -> DeleteAllSummary
    where
        R: Record,
        Store: HasTable<R>,
    {
        ops::execute_delete_all::<R>(self.store)
    }
}
