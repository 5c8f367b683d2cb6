//! UPDATE operation - shallow-merges a patch over an existing record.

use gather_core::{Lookup, Record, RecordId};
use gather_store::{HasTable, Store};
use tracing::debug;

use crate::error::{MutationError, MutationResult};

/// Merge a patch into the record with the given id and store the result.
///
/// Fields present in the patch overwrite, absent fields are kept. A missing
/// id is NotFound and leaves the collection untouched.
pub fn execute_update<R>(store: &mut Store, id: &RecordId, patch: R::Patch) -> MutationResult<R>
where
    R: Record,
    Store: HasTable<R>,
{
    let table = store.table_mut::<R>();
    let not_found = || MutationError::not_found(R::COLLECTION, Lookup::Id(id.clone()));

    let index = table.position(|r| r.id() == id).ok_or_else(not_found)?;
    let mut merged = table.get(index).cloned().ok_or_else(not_found)?;
    merged.merge(patch);

    table.replace_at(index, merged.clone())?;

    debug!(collection = %R::COLLECTION, id = %id, index, "updated record");
    Ok(merged)
}
