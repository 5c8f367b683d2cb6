//! Session result types.

use gather_core::{Account, AttendanceLink, Event, Location};
use gather_mutation::DeleteAllSummary;
use serde::Serialize;

/// Result of executing an operation: a record, a list of records, or a
/// bulk-clear summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Account(Account),
    Event(Event),
    Location(Location),
    Link(AttendanceLink),
    Accounts(Vec<Account>),
    Events(Vec<Event>),
    Locations(Vec<Location>),
    Links(Vec<AttendanceLink>),
    DeleteAll(DeleteAllSummary),
}

impl Outcome {
    /// Number of records carried (1 for a single record, 0 for a summary).
    pub fn record_count(&self) -> usize {
        match self {
            Outcome::Account(_) | Outcome::Event(_) | Outcome::Location(_) | Outcome::Link(_) => 1,
            Outcome::Accounts(v) => v.len(),
            Outcome::Events(v) => v.len(),
            Outcome::Locations(v) => v.len(),
            Outcome::Links(v) => v.len(),
            Outcome::DeleteAll(_) => 0,
        }
    }

    /// Variant name, for error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Account(_) => "account",
            Outcome::Event(_) => "event",
            Outcome::Location(_) => "location",
            Outcome::Link(_) => "link",
            Outcome::Accounts(_) => "accounts",
            Outcome::Events(_) => "events",
            Outcome::Locations(_) => "locations",
            Outcome::Links(_) => "links",
            Outcome::DeleteAll(_) => "delete-all summary",
        }
    }

    /// Count reported by a bulk clear.
    pub fn deleted_count(&self) -> Option<usize> {
        match self {
            Outcome::DeleteAll(summary) => Some(summary.count),
            _ => None,
        }
    }
}

/// A value that can be unpacked from an [`Outcome`].
///
/// Gives the outcome back when it holds a different variant.
pub trait FromOutcome: Sized {
    fn from_outcome(outcome: Outcome) -> Result<Self, Outcome>;
}

macro_rules! from_outcome {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl FromOutcome for $ty {
                fn from_outcome(outcome: Outcome) -> Result<Self, Outcome> {
                    match outcome {
                        Outcome::$variant(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

from_outcome! {
    Account => Account,
    Event => Event,
    Location => Location,
    Link => AttendanceLink,
    Accounts => Vec<Account>,
    Events => Vec<Event>,
    Locations => Vec<Location>,
    Links => Vec<AttendanceLink>,
    DeleteAll => DeleteAllSummary,
}
