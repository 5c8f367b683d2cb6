//! CREATE operation - appends a new record.

use gather_core::{IdSource, Record};
use gather_store::{HasTable, Store};
use tracing::debug;

/// Create a record from caller fields under a freshly generated id.
///
/// Field shapes are not validated and foreign keys are stored as given.
pub fn execute_create<R>(store: &mut Store, ids: &mut dyn IdSource, fields: R::Patch) -> R
where
    R: Record,
    Store: HasTable<R>,
{
    let id = ids.next_id();
    let record = R::from_patch(id, fields);

    store.table_mut::<R>().append(record.clone());

    debug!(collection = %R::COLLECTION, id = %record.id(), "created record");
    record
}
