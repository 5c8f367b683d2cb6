//! DELETE operation - removes the first record matching id or alternate key.

use gather_core::Record;
use gather_store::{HasTable, Store};
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::target::DeleteTarget;

/// Remove and return the first record (in insertion order) matching the
/// target's id or alternate key.
///
/// When several records share the alternate key only the first is removed.
pub fn execute_delete<R>(store: &mut Store, target: &DeleteTarget<R::Key>) -> MutationResult<R>
where
    R: Record,
    Store: HasTable<R>,
{
    let table = store.table_mut::<R>();

    let index = table
        .position(|r| target.matches(r))
        .ok_or_else(|| MutationError::not_found(R::COLLECTION, target.lookup::<R>()))?;
    let removed = table.remove_at(index)?;

    debug!(collection = %R::COLLECTION, id = %removed.id(), index, "deleted record");
    Ok(removed)
}
