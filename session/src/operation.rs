//! Operations a session can execute.
//!
//! One variant per (collection × verb) pair, plus the relationship lookups
//! that hang off events and attendance links.

use gather_core::{
    AccountPatch, AttendanceLink, Collection, Event, EventPatch, LinkKey, LinkPatch,
    LocationPatch, RecordId,
};
use gather_mutation::DeleteTarget;

/// A query or a mutation.
#[derive(Debug, Clone)]
pub enum Operation {
    Query(Query),
    Mutation(Mutation),
}

/// Read operations.
#[derive(Debug, Clone)]
pub enum Query {
    /// Every record of a collection.
    List(Collection),
    /// One record by id.
    Get(Collection, RecordId),
    /// Owner account of an event.
    ///
    /// Relationship lookups carry the record they start from, so they still
    /// resolve for a record that a mutation has just removed.
    Owner(Event),
    /// Location of an event.
    Location(Event),
    /// Attendance links of an event.
    Attendees(Event),
    /// Account of an attendance link.
    LinkAccount(AttendanceLink),
    /// Event of an attendance link.
    LinkEvent(AttendanceLink),
}

/// Write operations.
#[derive(Debug, Clone)]
pub enum Mutation {
    CreateAccount(AccountPatch),
    UpdateAccount(RecordId, AccountPatch),
    DeleteAccount(DeleteTarget<String>),

    CreateEvent(EventPatch),
    UpdateEvent(RecordId, EventPatch),
    DeleteEvent(DeleteTarget<String>),

    CreateLocation(LocationPatch),
    UpdateLocation(RecordId, LocationPatch),
    DeleteLocation(DeleteTarget<String>),

    CreateLink(LinkPatch),
    UpdateLink(RecordId, LinkPatch),
    DeleteLink(DeleteTarget<LinkKey>),

    /// Clear a whole collection.
    DeleteAll(Collection),
}

impl Operation {
    /// Short operation name for logging (`createEvent`, `accounts`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Query(query) => query.name(),
            Operation::Mutation(mutation) => mutation.name(),
        }
    }
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::List(collection) => collection.name(),
            Query::Get(collection, _) => collection.record_name(),
            Query::Owner(_) => "event.owner",
            Query::Location(_) => "event.location",
            Query::Attendees(_) => "event.attendees",
            Query::LinkAccount(_) => "link.account",
            Query::LinkEvent(_) => "link.event",
        }
    }
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::CreateAccount(_) => "createAccount",
            Mutation::UpdateAccount(..) => "updateAccount",
            Mutation::DeleteAccount(_) => "deleteAccount",
            Mutation::CreateEvent(_) => "createEvent",
            Mutation::UpdateEvent(..) => "updateEvent",
            Mutation::DeleteEvent(_) => "deleteEvent",
            Mutation::CreateLocation(_) => "createLocation",
            Mutation::UpdateLocation(..) => "updateLocation",
            Mutation::DeleteLocation(_) => "deleteLocation",
            Mutation::CreateLink(_) => "createLink",
            Mutation::UpdateLink(..) => "updateLink",
            Mutation::DeleteLink(_) => "deleteLink",
            Mutation::DeleteAll(Collection::Accounts) => "deleteAllAccounts",
            Mutation::DeleteAll(Collection::Events) => "deleteAllEvents",
            Mutation::DeleteAll(Collection::Locations) => "deleteAllLocations",
            Mutation::DeleteAll(Collection::Links) => "deleteAllLinks",
        }
    }
}

impl From<Query> for Operation {
    fn from(query: Query) -> Self {
        Operation::Query(query)
    }
}

impl From<Mutation> for Operation {
    fn from(mutation: Mutation) -> Self {
        Operation::Mutation(mutation)
    }
}
