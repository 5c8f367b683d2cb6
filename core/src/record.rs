//! The Record trait.
//!
//! Every collection holds one record type. The trait links that type to its
//! collection, its patch type (for create and shallow-merge update) and its
//! alternate delete key.

use crate::{Collection, Lookup, RecordId};
use std::fmt;

/// A record stored in one of the four collections.
pub trait Record: Clone + fmt::Debug + Send + 'static {
    /// Collection this record type lives in.
    const COLLECTION: Collection;

    /// Partial field set used for create and update.
    type Patch: Default + Clone + fmt::Debug;

    /// Alternate key accepted by delete in place of the id.
    type Key: Clone + fmt::Debug;

    /// Primary identifier.
    fn id(&self) -> &RecordId;

    /// Build a fresh record from an assigned id and caller-supplied fields.
    fn from_patch(id: RecordId, patch: Self::Patch) -> Self;

    /// Shallow merge: fields present in the patch overwrite, others are kept.
    fn merge(&mut self, patch: Self::Patch);

    /// Whether this record matches the alternate key.
    fn matches_key(&self, key: &Self::Key) -> bool;

    /// Describe an alternate key for not-found reporting.
    fn key_lookups(key: &Self::Key) -> Vec<Lookup>;
}
