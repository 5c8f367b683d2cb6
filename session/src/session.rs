//! Session manager.

use gather_core::{
    Account, AttendanceLink, Collection, Event, IdSource, Location, Record, RecordId, UuidIds,
};
use gather_mutation::{DeleteAllSummary, DeleteTarget, MutationExecutor};
use gather_query::QueryExecutor;
use gather_store::{Dataset, HasTable, Store};
use tracing::{debug, debug_span, warn};

use crate::error::{SessionError, SessionResult};
use crate::operation::{Mutation, Operation, Query};
use crate::result::{FromOutcome, Outcome};

/// A Gather session.
pub struct Session {
    /// The record store.
    store: Store,
    /// Identifier source for creates.
    ids: Box<dyn IdSource>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store.counts())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session with an empty store and random ids.
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Create a session over an existing store.
    pub fn with_store(store: Store) -> Self {
        Self::with_ids(store, Box::new(UuidIds::new()))
    }

    /// Create a session over an existing store with a custom id source.
    pub fn with_ids(store: Store, ids: Box<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    /// Create a session seeded from a dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::with_store(Store::from_dataset(dataset))
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Execute an operation.
    pub fn execute(&mut self, op: Operation) -> SessionResult<Outcome> {
        let span = debug_span!("operation", name = op.name());
        let _guard = span.enter();

        let result = match op {
            Operation::Query(query) => self.execute_query(query),
            Operation::Mutation(mutation) => self.execute_mutation(mutation),
        };

        match &result {
            Ok(outcome) => debug!(records = outcome.record_count(), "operation completed"),
            Err(e) if e.is_not_found() => warn!(error = %e, "operation found nothing"),
            Err(e) => warn!(error = %e, "operation failed"),
        }
        result
    }

    /// Execute an operation and unpack its outcome as `T`.
    pub fn run<T: FromOutcome>(&mut self, op: impl Into<Operation>) -> SessionResult<T> {
        let op = op.into();
        let operation = op.name();
        T::from_outcome(self.execute(op)?).map_err(|other| SessionError::UnexpectedOutcome {
            operation,
            outcome: other.kind(),
            expected: std::any::type_name::<T>(),
        })
    }

    fn execute_query(&self, query: Query) -> SessionResult<Outcome> {
        Ok(match query {
            Query::List(Collection::Accounts) => Outcome::Accounts(self.list::<Account>()),
            Query::List(Collection::Events) => Outcome::Events(self.list::<Event>()),
            Query::List(Collection::Locations) => Outcome::Locations(self.list::<Location>()),
            Query::List(Collection::Links) => Outcome::Links(self.list::<AttendanceLink>()),
            Query::Get(Collection::Accounts, id) => Outcome::Account(self.get(&id)?),
            Query::Get(Collection::Events, id) => Outcome::Event(self.get(&id)?),
            Query::Get(Collection::Locations, id) => Outcome::Location(self.get(&id)?),
            Query::Get(Collection::Links, id) => Outcome::Link(self.get(&id)?),
            Query::Owner(event) => Outcome::Account(self.owner(&event)?),
            Query::Location(event) => Outcome::Location(self.location(&event)?),
            Query::Attendees(event) => Outcome::Links(self.attendees(&event)),
            Query::LinkAccount(link) => Outcome::Account(self.link_account(&link)?),
            Query::LinkEvent(link) => Outcome::Event(self.link_event(&link)?),
        })
    }

    fn execute_mutation(&mut self, mutation: Mutation) -> SessionResult<Outcome> {
        Ok(match mutation {
            Mutation::CreateAccount(fields) => Outcome::Account(self.create(fields)),
            Mutation::UpdateAccount(id, patch) => Outcome::Account(self.update(&id, patch)?),
            Mutation::DeleteAccount(target) => Outcome::Account(self.delete(&target)?),

            Mutation::CreateEvent(fields) => Outcome::Event(self.create(fields)),
            Mutation::UpdateEvent(id, patch) => Outcome::Event(self.update(&id, patch)?),
            Mutation::DeleteEvent(target) => Outcome::Event(self.delete(&target)?),

            Mutation::CreateLocation(fields) => Outcome::Location(self.create(fields)),
            Mutation::UpdateLocation(id, patch) => Outcome::Location(self.update(&id, patch)?),
            Mutation::DeleteLocation(target) => Outcome::Location(self.delete(&target)?),

            Mutation::CreateLink(fields) => Outcome::Link(self.create(fields)),
            Mutation::UpdateLink(id, patch) => Outcome::Link(self.update(&id, patch)?),
            Mutation::DeleteLink(target) => Outcome::Link(self.delete(&target)?),

            Mutation::DeleteAll(Collection::Accounts) => {
                Outcome::DeleteAll(self.delete_all::<Account>())
            }
            Mutation::DeleteAll(Collection::Events) => Outcome::DeleteAll(self.delete_all::<Event>()),
            Mutation::DeleteAll(Collection::Locations) => {
                Outcome::DeleteAll(self.delete_all::<Location>())
            }
            Mutation::DeleteAll(Collection::Links) => {
                Outcome::DeleteAll(self.delete_all::<AttendanceLink>())
            }
        })
    }

    // ==================== Queries ====================

    /// Every record of a collection, in insertion order.
    fn list<R: Record>(&self) -> Vec<R>
    where
        Store: HasTable<R>,
    {
        QueryExecutor::new(&self.store).list::<R>().to_vec()
    }

    /// One record by id.
    fn get<R: Record>(&self, id: &RecordId) -> SessionResult<R>
    where
        Store: HasTable<R>,
    {
        Ok(QueryExecutor::new(&self.store).get::<R>(id)?.clone())
    }

    /// Owner account of an event.
    fn owner(&self, event: &Event) -> SessionResult<Account> {
        Ok(QueryExecutor::new(&self.store).relations().owner(event)?.clone())
    }

    /// Location of an event.
    fn location(&self, event: &Event) -> SessionResult<Location> {
        Ok(QueryExecutor::new(&self.store).relations().location(event)?.clone())
    }

    /// Attendance links of an event.
    fn attendees(&self, event: &Event) -> Vec<AttendanceLink> {
        QueryExecutor::new(&self.store)
            .relations()
            .attendees(event)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Account of an attendance link.
    fn link_account(&self, link: &AttendanceLink) -> SessionResult<Account> {
        Ok(QueryExecutor::new(&self.store).relations().account(link)?.clone())
    }

    /// Event of an attendance link.
    fn link_event(&self, link: &AttendanceLink) -> SessionResult<Event> {
        Ok(QueryExecutor::new(&self.store).relations().event(link)?.clone())
    }

    // ==================== Mutations ====================

    fn executor(&mut self) -> MutationExecutor<'_, '_> {
        MutationExecutor::new(&mut self.store, self.ids.as_mut())
    }

    /// Create a record.
    fn create<R: Record>(&mut self, fields: R::Patch) -> R
    where
        Store: HasTable<R>,
    {
        self.executor().create::<R>(fields)
    }

    /// Shallow-merge a patch into an existing record.
    fn update<R: Record>(&mut self, id: &RecordId, patch: R::Patch) -> SessionResult<R>
    where
        Store: HasTable<R>,
    {
        Ok(self.executor().update::<R>(id, patch)?)
    }

    /// Delete the first record matching id or alternate key.
    fn delete<R: Record>(&mut self, target: &DeleteTarget<R::Key>) -> SessionResult<R>
    where
        Store: HasTable<R>,
    {
        Ok(self.executor().delete::<R>(target)?)
    }

    /// Clear a collection.
    fn delete_all<R: Record>(&mut self) -> DeleteAllSummary
    where
        Store: HasTable<R>,
    {
        self.executor().delete_all::<R>()
    }
}
