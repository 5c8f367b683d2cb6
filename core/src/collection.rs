//! Collection names and lookup descriptions.

use crate::RecordId;
use std::fmt;

/// One of the four record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Accounts,
    Events,
    Locations,
    Links,
}

impl Collection {
    /// All collections, in declaration order.
    pub const ALL: [Collection; 4] = [
        Collection::Accounts,
        Collection::Events,
        Collection::Locations,
        Collection::Links,
    ];

    /// Plural collection name as used in queries and datasets.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Accounts => "accounts",
            Collection::Events => "events",
            Collection::Locations => "locations",
            Collection::Links => "links",
        }
    }

    /// Singular record name, used in error messages.
    pub fn record_name(&self) -> &'static str {
        match self {
            Collection::Accounts => "account",
            Collection::Events => "event",
            Collection::Locations => "location",
            Collection::Links => "link",
        }
    }

    /// Field(s) accepted as an alternate key when deleting.
    pub fn label_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Accounts => &["username"],
            Collection::Events => &["title"],
            Collection::Locations => &["name"],
            Collection::Links => &["account_id", "event_id"],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a failed lookup was searching for.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Match on the primary id.
    Id(RecordId),
    /// Match on a named field.
    Field { field: &'static str, value: String },
    /// Match on any of several criteria (first match wins).
    AnyOf(Vec<Lookup>),
    /// A foreign key that was never set.
    Unset(&'static str),
}

impl Lookup {
    pub fn id(id: impl Into<RecordId>) -> Self {
        Self::Id(id.into())
    }

    pub fn field(field: &'static str, value: impl Into<String>) -> Self {
        Self::Field {
            field,
            value: value.into(),
        }
    }

    /// Lookup for a foreign key that may be absent.
    pub fn foreign_key(field: &'static str, value: Option<&RecordId>) -> Self {
        match value {
            Some(id) => Self::Id(id.clone()),
            None => Self::Unset(field),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "id={}", id),
            Lookup::Field { field, value } => write!(f, "{}={}", field, value),
            Lookup::AnyOf(lookups) if lookups.is_empty() => f.write_str("no key given"),
            Lookup::AnyOf(lookups) => {
                for (i, lookup) in lookups.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{}", lookup)?;
                }
                Ok(())
            }
            Lookup::Unset(field) => write!(f, "{} is unset", field),
        }
    }
}
