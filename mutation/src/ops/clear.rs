//! DELETE ALL operation - clears a collection.

use gather_core::Record;
use gather_store::{HasTable, Store};
use tracing::info;

use crate::result::DeleteAllSummary;

/// Remove every record of a collection and report how many there were.
pub fn execute_delete_all<R>(store: &mut Store) -> DeleteAllSummary
where
    R: Record,
    Store: HasTable<R>,
{
    let count = store.table_mut::<R>().clear();

    info!(collection = %R::COLLECTION, count, "cleared collection");
    DeleteAllSummary::new(count)
}
