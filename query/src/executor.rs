//! Collection and single-record queries.

use gather_core::{Lookup, Record, RecordId};
use gather_store::{HasTable, Store};

use crate::error::{QueryError, QueryResult};
use crate::relation::RelationResolver;

/// Query executor.
pub struct QueryExecutor<'s> {
    store: &'s Store,
}

impl<'s> QueryExecutor<'s> {
    /// Create a new executor.
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// All records of a collection, in insertion order.
    pub fn list<R: Record>(&self) -> &'s [R]
    where
        Store: HasTable<R>,
    {
        self.store.table::<R>().all()
    }

    /// The record with the given id.
    pub fn get<R: Record>(&self, id: &RecordId) -> QueryResult<&'s R>
    where
        Store: HasTable<R>,
    {
        self.store
            .table::<R>()
            .find_by_id(id)
            .ok_or_else(|| QueryError::not_found(R::COLLECTION, Lookup::Id(id.clone())))
    }

    /// Relationship resolver over the same store.
    pub fn relations(&self) -> RelationResolver<'s> {
        RelationResolver::new(self.store)
    }
}
