//! The four-collection record store.

use gather_core::{Account, AttendanceLink, Event, Location, Record};
use std::fmt;
use tracing::debug;

use crate::dataset::Dataset;
use crate::table::Table;

/// Owned storage for all four collections.
///
/// The store has no internal locking. Mutation requires `&mut Store`, so
/// callers that share a store across threads must serialize access
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct Store {
    accounts: Table<Account>,
    events: Table<Event>,
    locations: Table<Location>,
    links: Table<AttendanceLink>,
}

/// Typed access to the table holding `R`.
pub trait HasTable<R: Record> {
    fn table(&self) -> &Table<R>;
    fn table_mut(&mut self) -> &mut Table<R>;
}

macro_rules! impl_has_table {
    ($record:ty, $field:ident) => {
        impl HasTable<$record> for Store {
            fn table(&self) -> &Table<$record> {
                &self.$field
            }

            fn table_mut(&mut self) -> &mut Table<$record> {
                &mut self.$field
            }
        }
    };
}

impl_has_table!(Account, accounts);
impl_has_table!(Event, events);
impl_has_table!(Location, locations);
impl_has_table!(AttendanceLink, links);

impl Store {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a parsed dataset, keeping record order.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let store = Self {
            accounts: Table::from_records(dataset.accounts),
            events: Table::from_records(dataset.events),
            locations: Table::from_records(dataset.locations),
            links: Table::from_records(dataset.links),
        };
        debug!(counts = %store.counts(), "store built from dataset");
        store
    }

    /// The table holding `R`.
    pub fn table<R: Record>(&self) -> &Table<R>
    where
        Self: HasTable<R>,
    {
        HasTable::<R>::table(self)
    }

    /// The table holding `R`, mutably.
    pub fn table_mut<R: Record>(&mut self) -> &mut Table<R>
    where
        Self: HasTable<R>,
    {
        HasTable::<R>::table_mut(self)
    }

    pub fn accounts(&self) -> &Table<Account> {
        &self.accounts
    }

    pub fn events(&self) -> &Table<Event> {
        &self.events
    }

    pub fn locations(&self) -> &Table<Location> {
        &self.locations
    }

    pub fn links(&self) -> &Table<AttendanceLink> {
        &self.links
    }

    /// Record counts per collection.
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            accounts: self.accounts.len(),
            events: self.events.len(),
            locations: self.locations.len(),
            links: self.links.len(),
        }
    }
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub accounts: usize,
    pub events: usize,
    pub locations: usize,
    pub links: usize,
}

impl fmt::Display for StoreCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} accounts, {} events, {} locations, {} links",
            self.accounts, self.events, self.locations, self.links
        )
    }
}
