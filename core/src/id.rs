//! Identity types for Gather records.
//!
//! Record identifiers are opaque strings that are:
//! - Unique within the process lifetime of their generator
//! - Immutable once assigned
//! - Never checked against the store for collisions

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a record.
///
/// Seed datasets may carry integer ids; those are kept in their decimal
/// string form so `1` and `"1"` name the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new RecordId from a raw value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return the raw value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// A source of fresh record identifiers.
///
/// Implementations guarantee that `next_id` never returns a value it has
/// returned before.
pub trait IdSource: Send {
    /// Produce the next identifier.
    fn next_id(&mut self) -> RecordId;
}

/// Random v4 UUID identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl UuidIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for UuidIds {
    fn next_id(&mut self) -> RecordId {
        RecordId(Uuid::new_v4().to_string())
    }
}

/// Counter-based identifiers (`<prefix>-1`, `<prefix>-2`, ...).
///
/// Deterministic, which makes it the generator of choice in tests.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> RecordId {
        let id = RecordId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
