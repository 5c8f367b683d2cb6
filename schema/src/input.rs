//! GraphQL input objects.
//!
//! Every field is optional: create takes whatever subset is given and
//! update overlays only the fields present. An explicit `null` is kept
//! apart from an omitted field so that update can clear a value.

use std::convert::identity;

use gather_core::{AccountPatch, Change, EventPatch, LinkPatch, LocationPatch};
use juniper::{GraphQLInputObject, Nullable, ID};

use crate::object::record_id;

fn change<T, U>(value: Nullable<T>, convert: impl FnOnce(T) -> U) -> Change<U> {
    match value {
        Nullable::ImplicitNull => None,
        Nullable::ExplicitNull => Some(None),
        Nullable::Some(value) => Some(Some(convert(value))),
    }
}

fn id(value: ID) -> gather_core::RecordId {
    record_id(&value)
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct AccountInput {
    pub username: Nullable<String>,
    pub email: Nullable<String>,
}

impl From<AccountInput> for AccountPatch {
    fn from(input: AccountInput) -> Self {
        Self {
            username: change(input.username, identity),
            email: change(input.email, identity),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct EventInput {
    pub title: Nullable<String>,
    pub desc: Nullable<String>,
    pub date: Nullable<String>,
    pub from: Nullable<String>,
    pub to: Nullable<String>,
    #[graphql(name = "location_id")]
    pub location_id: Nullable<ID>,
    #[graphql(name = "owner_id")]
    pub owner_id: Nullable<ID>,
}

impl From<EventInput> for EventPatch {
    fn from(input: EventInput) -> Self {
        Self {
            title: change(input.title, identity),
            desc: change(input.desc, identity),
            date: change(input.date, identity),
            from: change(input.from, identity),
            to: change(input.to, identity),
            location_id: change(input.location_id, id),
            owner_id: change(input.owner_id, id),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct LocationInput {
    pub name: Nullable<String>,
    pub desc: Nullable<String>,
    pub lat: Nullable<f64>,
    pub lng: Nullable<f64>,
}

impl From<LocationInput> for LocationPatch {
    fn from(input: LocationInput) -> Self {
        Self {
            name: change(input.name, identity),
            desc: change(input.desc, identity),
            lat: change(input.lat, identity),
            lng: change(input.lng, identity),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
#[graphql(name = "AttendanceLinkInput")]
pub struct LinkInput {
    #[graphql(name = "account_id")]
    pub account_id: Nullable<ID>,
    #[graphql(name = "event_id")]
    pub event_id: Nullable<ID>,
}

impl From<LinkInput> for LinkPatch {
    fn from(input: LinkInput) -> Self {
        Self {
            account_id: change(input.account_id, id),
            event_id: change(input.event_id, id),
        }
    }
}
