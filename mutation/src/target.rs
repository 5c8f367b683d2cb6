//! Delete targets.

use gather_core::{Lookup, Record, RecordId};

/// What a delete should match: the id, the alternate key, or either.
///
/// A part that is not supplied never matches anything, so a target with
/// neither part matches no record.
#[derive(Debug, Clone)]
pub struct DeleteTarget<K> {
    pub id: Option<RecordId>,
    pub key: Option<K>,
}

impl<K> DeleteTarget<K> {
    pub fn new(id: Option<RecordId>, key: Option<K>) -> Self {
        Self { id, key }
    }

    /// Match by id only.
    pub fn id(id: impl Into<RecordId>) -> Self {
        Self {
            id: Some(id.into()),
            key: None,
        }
    }

    /// Whether a record satisfies the id or the alternate key.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Key = K>,
    {
        let by_id = self.id.as_ref().is_some_and(|id| record.id() == id);
        let by_key = self.key.as_ref().is_some_and(|key| record.matches_key(key));
        by_id || by_key
    }

    /// Describe the target for not-found reporting.
    pub fn lookup<R>(&self) -> Lookup
    where
        R: Record<Key = K>,
    {
        let mut lookups = Vec::new();
        if let Some(ref id) = self.id {
            lookups.push(Lookup::Id(id.clone()));
        }
        if let Some(ref key) = self.key {
            lookups.extend(R::key_lookups(key));
        }
        Lookup::AnyOf(lookups)
    }
}
