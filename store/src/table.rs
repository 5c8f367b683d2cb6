//! A single ordered record collection.
//!
//! Records keep insertion order. Every lookup is a linear scan; there is no
//! index. All mutating operations act in place.

use gather_core::{Record, RecordId};

use crate::error::{StoreError, StoreResult};

/// Ordered storage for one record type.
#[derive(Debug, Clone)]
pub struct Table<R> {
    records: Vec<R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Table<R> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the given records in order.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by position.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Find the first record with the given id.
    pub fn find_by_id(&self, id: &RecordId) -> Option<&R> {
        self.find_one(|r| r.id() == id)
    }

    /// Find the first record satisfying a predicate.
    pub fn find_one<P>(&self, predicate: P) -> Option<&R>
    where
        P: FnMut(&&R) -> bool,
    {
        self.records.iter().find(predicate)
    }

    /// Position of the first record satisfying a predicate.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&R) -> bool,
    {
        self.records.iter().position(predicate)
    }

    /// Append a record at the end.
    pub fn append(&mut self, record: R) {
        self.records.push(record);
    }

    /// Replace the record at a position, returning the old one.
    pub fn replace_at(&mut self, index: usize, record: R) -> StoreResult<R> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or_else(|| StoreError::index_out_of_range(R::COLLECTION, index, len))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Remove and return the record at a position, shifting later records down.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<R> {
        if index >= self.records.len() {
            return Err(StoreError::index_out_of_range(
                R::COLLECTION,
                index,
                self.records.len(),
            ));
        }
        Ok(self.records.remove(index))
    }

    /// Remove every record, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }
}

impl<'a, R: Record> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
