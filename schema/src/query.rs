//! Query root.

use gather_core::{Account, AttendanceLink, Collection, Event, Location};
use gather_session::Query;
use juniper::{graphql_object, FieldResult, ID};

use crate::context::Context;
use crate::object::{record_id, AccountNode, EventNode, LinkNode, LocationNode};

/// Read access to every collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRoot;

#[graphql_object(context = Context, name = "Query")]
impl QueryRoot {
    fn accounts(context: &Context) -> FieldResult<Vec<AccountNode>> {
        let accounts: Vec<Account> = context.run(Query::List(Collection::Accounts))?;
        Ok(accounts.into_iter().map(AccountNode).collect())
    }

    fn account(context: &Context, id: ID) -> FieldResult<Option<AccountNode>> {
        let account = context.run(Query::Get(Collection::Accounts, record_id(&id)))?;
        Ok(Some(AccountNode(account)))
    }

    fn events(context: &Context) -> FieldResult<Vec<EventNode>> {
        let events: Vec<Event> = context.run(Query::List(Collection::Events))?;
        Ok(events.into_iter().map(EventNode).collect())
    }

    fn event(context: &Context, id: ID) -> FieldResult<Option<EventNode>> {
        let event = context.run(Query::Get(Collection::Events, record_id(&id)))?;
        Ok(Some(EventNode(event)))
    }

    fn locations(context: &Context) -> FieldResult<Vec<LocationNode>> {
        let locations: Vec<Location> = context.run(Query::List(Collection::Locations))?;
        Ok(locations.into_iter().map(LocationNode).collect())
    }

    fn location(context: &Context, id: ID) -> FieldResult<Option<LocationNode>> {
        let location = context.run(Query::Get(Collection::Locations, record_id(&id)))?;
        Ok(Some(LocationNode(location)))
    }

    fn links(context: &Context) -> FieldResult<Vec<LinkNode>> {
        let links: Vec<AttendanceLink> = context.run(Query::List(Collection::Links))?;
        Ok(links.into_iter().map(LinkNode).collect())
    }

    fn link(context: &Context, id: ID) -> FieldResult<Option<LinkNode>> {
        let link = context.run(Query::Get(Collection::Links, record_id(&id)))?;
        Ok(Some(LinkNode(link)))
    }
}
