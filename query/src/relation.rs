//! Relationship resolution by foreign key.
//!
//! Each lookup scans its target collection on every call. There is no
//! caching, so resolving the same event twice scans twice.

use gather_core::{Account, AttendanceLink, Event, Location, Lookup, Record, RecordId};
use gather_store::{HasTable, Store};
use tracing::trace;

use crate::error::{QueryError, QueryResult};

/// Read-only resolver for related records.
pub struct RelationResolver<'s> {
    store: &'s Store,
}

impl<'s> RelationResolver<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// The account that owns an event.
    pub fn owner(&self, event: &Event) -> QueryResult<&'s Account> {
        self.parent(event.owner_id.as_ref(), "owner_id")
    }

    /// The location an event is held at.
    pub fn location(&self, event: &Event) -> QueryResult<&'s Location> {
        self.parent(event.location_id.as_ref(), "location_id")
    }

    /// Attendance links for an event. Empty when nobody attends.
    pub fn attendees(&self, event: &Event) -> Vec<&'s AttendanceLink> {
        let attendees: Vec<_> = self
            .store
            .links()
            .iter()
            .filter(|link| link.event_id.as_ref() == Some(&event.id))
            .collect();
        trace!(event = %event.id, count = attendees.len(), "resolved attendees");
        attendees
    }

    /// The account an attendance link points at.
    pub fn account(&self, link: &AttendanceLink) -> QueryResult<&'s Account> {
        self.parent(link.account_id.as_ref(), "account_id")
    }

    /// The event an attendance link points at.
    pub fn event(&self, link: &AttendanceLink) -> QueryResult<&'s Event> {
        self.parent(link.event_id.as_ref(), "event_id")
    }

    /// Scan the collection of `R` for the record a foreign key names.
    ///
    /// An unset or dangling key yields NotFound.
    fn parent<R: Record>(&self, key: Option<&RecordId>, field: &'static str) -> QueryResult<&'s R>
    where
        Store: HasTable<R>,
    {
        let not_found = || QueryError::not_found(R::COLLECTION, Lookup::foreign_key(field, key));
        let id = key.ok_or_else(not_found)?;
        let found = self.store.table::<R>().find_by_id(id).ok_or_else(not_found)?;
        trace!(collection = %R::COLLECTION, id = %id, "resolved {}", field);
        Ok(found)
    }
}
