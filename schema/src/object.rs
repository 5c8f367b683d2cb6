//! GraphQL object types.
//!
//! Each node wraps an owned copy of a record. Relationship fields lock the
//! session again when (and only when) they are requested.

use gather_core::{Account, AttendanceLink, Event, Location, RecordId};
use gather_session::{DeleteAllSummary, Query};
use juniper::{graphql_object, FieldResult, ID};

use crate::context::Context;

pub(crate) fn to_id(id: &RecordId) -> ID {
    ID::new(id.as_str())
}

pub(crate) fn opt_id(id: &Option<RecordId>) -> Option<ID> {
    id.as_ref().map(to_id)
}

pub(crate) fn record_id(id: &ID) -> RecordId {
    RecordId::new(&**id)
}

/// A user account.
#[derive(Debug, Clone)]
pub struct AccountNode(pub Account);

#[graphql_object(context = Context, name = "Account")]
impl AccountNode {
    fn id(&self) -> ID {
        to_id(&self.0.id)
    }

    fn username(&self) -> Option<String> {
        self.0.username.clone()
    }

    fn email(&self) -> Option<String> {
        self.0.email.clone()
    }
}

/// A scheduled event.
#[derive(Debug, Clone)]
pub struct EventNode(pub Event);

#[graphql_object(context = Context, name = "Event")]
impl EventNode {
    fn id(&self) -> ID {
        to_id(&self.0.id)
    }

    fn title(&self) -> Option<String> {
        self.0.title.clone()
    }

    fn desc(&self) -> Option<String> {
        self.0.desc.clone()
    }

    fn date(&self) -> Option<String> {
        self.0.date.clone()
    }

    fn from(&self) -> Option<String> {
        self.0.from.clone()
    }

    fn to(&self) -> Option<String> {
        self.0.to.clone()
    }

    #[graphql(name = "location_id")]
    fn location_id(&self) -> Option<ID> {
        opt_id(&self.0.location_id)
    }

    #[graphql(name = "owner_id")]
    fn owner_id(&self) -> Option<ID> {
        opt_id(&self.0.owner_id)
    }

    /// The owning account.
    fn owner(&self, context: &Context) -> FieldResult<Option<AccountNode>> {
        let account = context.run(Query::Owner(self.0.clone()))?;
        Ok(Some(AccountNode(account)))
    }

    /// Where the event is held.
    fn location(&self, context: &Context) -> FieldResult<Option<LocationNode>> {
        let location = context.run(Query::Location(self.0.clone()))?;
        Ok(Some(LocationNode(location)))
    }

    /// Attendance links for this event.
    fn attendees(&self, context: &Context) -> FieldResult<Vec<LinkNode>> {
        let links: Vec<AttendanceLink> = context.run(Query::Attendees(self.0.clone()))?;
        Ok(links.into_iter().map(LinkNode).collect())
    }
}

/// A place where events are held.
#[derive(Debug, Clone)]
pub struct LocationNode(pub Location);

#[graphql_object(context = Context, name = "Location")]
impl LocationNode {
    fn id(&self) -> ID {
        to_id(&self.0.id)
    }

    fn name(&self) -> Option<String> {
        self.0.name.clone()
    }

    fn desc(&self) -> Option<String> {
        self.0.desc.clone()
    }

    fn lat(&self) -> Option<f64> {
        self.0.lat
    }

    fn lng(&self) -> Option<f64> {
        self.0.lng
    }
}

/// An account attending an event.
#[derive(Debug, Clone)]
pub struct LinkNode(pub AttendanceLink);

#[graphql_object(context = Context, name = "AttendanceLink")]
impl LinkNode {
    fn id(&self) -> ID {
        to_id(&self.0.id)
    }

    #[graphql(name = "account_id")]
    fn account_id(&self) -> Option<ID> {
        opt_id(&self.0.account_id)
    }

    #[graphql(name = "event_id")]
    fn event_id(&self) -> Option<ID> {
        opt_id(&self.0.event_id)
    }

    /// The attending account.
    fn account(&self, context: &Context) -> FieldResult<Option<AccountNode>> {
        let account = context.run(Query::LinkAccount(self.0.clone()))?;
        Ok(Some(AccountNode(account)))
    }

    /// The attended event.
    fn event(&self, context: &Context) -> FieldResult<Option<EventNode>> {
        let event = context.run(Query::LinkEvent(self.0.clone()))?;
        Ok(Some(EventNode(event)))
    }
}

/// Result of clearing a collection.
#[derive(Debug, Clone, Copy)]
pub struct DeleteAllNode(pub DeleteAllSummary);

#[graphql_object(context = Context, name = "DeleteAllSummary")]
impl DeleteAllNode {
    /// Number of records removed.
    fn count(&self) -> i32 {
        i32::try_from(self.0.count).unwrap_or(i32::MAX)
    }
}
