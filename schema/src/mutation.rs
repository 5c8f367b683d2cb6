//! Mutation root.
//!
//! Per collection: `createX(data)`, `updateX(id, data)`,
//! `deleteX(id, <alternate key>)` and `deleteAllXs`.

use gather_core::{Collection, LinkKey};
use gather_session::{DeleteTarget, Mutation};
use juniper::{graphql_object, FieldResult, ID};

use crate::context::Context;
use crate::input::{AccountInput, EventInput, LinkInput, LocationInput};
use crate::object::{
    record_id, AccountNode, DeleteAllNode, EventNode, LinkNode, LocationNode,
};

/// Write access to every collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutationRoot;

#[graphql_object(context = Context, name = "Mutation")]
impl MutationRoot {
    // ==================== Accounts ====================

    fn create_account(context: &Context, data: Option<AccountInput>) -> FieldResult<AccountNode> {
        let fields = data.unwrap_or_default().into();
        context.run(Mutation::CreateAccount(fields)).map(AccountNode)
    }

    fn update_account(
        context: &Context,
        id: ID,
        data: Option<AccountInput>,
    ) -> FieldResult<Option<AccountNode>> {
        let patch = data.unwrap_or_default().into();
        let account = context.run(Mutation::UpdateAccount(record_id(&id), patch))?;
        Ok(Some(AccountNode(account)))
    }

    fn delete_account(
        context: &Context,
        id: Option<ID>,
        username: Option<String>,
    ) -> FieldResult<Option<AccountNode>> {
        let target = DeleteTarget::new(id.as_ref().map(record_id), username);
        let account = context.run(Mutation::DeleteAccount(target))?;
        Ok(Some(AccountNode(account)))
    }

    fn delete_all_accounts(context: &Context) -> FieldResult<DeleteAllNode> {
        context.run(Mutation::DeleteAll(Collection::Accounts)).map(DeleteAllNode)
    }

    // ==================== Events ====================

    fn create_event(context: &Context, data: Option<EventInput>) -> FieldResult<EventNode> {
        let fields = data.unwrap_or_default().into();
        context.run(Mutation::CreateEvent(fields)).map(EventNode)
    }

    fn update_event(
        context: &Context,
        id: ID,
        data: Option<EventInput>,
    ) -> FieldResult<Option<EventNode>> {
        let patch = data.unwrap_or_default().into();
        let event = context.run(Mutation::UpdateEvent(record_id(&id), patch))?;
        Ok(Some(EventNode(event)))
    }

    fn delete_event(
        context: &Context,
        id: Option<ID>,
        title: Option<String>,
    ) -> FieldResult<Option<EventNode>> {
        let target = DeleteTarget::new(id.as_ref().map(record_id), title);
        let event = context.run(Mutation::DeleteEvent(target))?;
        Ok(Some(EventNode(event)))
    }

    fn delete_all_events(context: &Context) -> FieldResult<DeleteAllNode> {
        context.run(Mutation::DeleteAll(Collection::Events)).map(DeleteAllNode)
    }

    // ==================== Locations ====================

    fn create_location(context: &Context, data: Option<LocationInput>) -> FieldResult<LocationNode> {
        let fields = data.unwrap_or_default().into();
        context.run(Mutation::CreateLocation(fields)).map(LocationNode)
    }

    fn update_location(
        context: &Context,
        id: ID,
        data: Option<LocationInput>,
    ) -> FieldResult<Option<LocationNode>> {
        let patch = data.unwrap_or_default().into();
        let location = context.run(Mutation::UpdateLocation(record_id(&id), patch))?;
        Ok(Some(LocationNode(location)))
    }

    fn delete_location(
        context: &Context,
        id: Option<ID>,
        name: Option<String>,
    ) -> FieldResult<Option<LocationNode>> {
        let target = DeleteTarget::new(id.as_ref().map(record_id), name);
        let location = context.run(Mutation::DeleteLocation(target))?;
        Ok(Some(LocationNode(location)))
    }

    fn delete_all_locations(context: &Context) -> FieldResult<DeleteAllNode> {
        context.run(Mutation::DeleteAll(Collection::Locations)).map(DeleteAllNode)
    }

    // ==================== Links ====================

    fn create_link(context: &Context, data: Option<LinkInput>) -> FieldResult<LinkNode> {
        let fields = data.unwrap_or_default().into();
        context.run(Mutation::CreateLink(fields)).map(LinkNode)
    }

    fn update_link(
        context: &Context,
        id: ID,
        data: Option<LinkInput>,
    ) -> FieldResult<Option<LinkNode>> {
        let patch = data.unwrap_or_default().into();
        let link = context.run(Mutation::UpdateLink(record_id(&id), patch))?;
        Ok(Some(LinkNode(link)))
    }

    /// Delete the first link whose id, account or event matches.
    fn delete_link(
        context: &Context,
        id: Option<ID>,
        #[graphql(name = "account_id")] account_id: Option<ID>,
        #[graphql(name = "event_id")] event_id: Option<ID>,
    ) -> FieldResult<Option<LinkNode>> {
        let key = LinkKey::from_parts(
            account_id.as_ref().map(record_id),
            event_id.as_ref().map(record_id),
        );
        let target = DeleteTarget::new(id.as_ref().map(record_id), key);
        let link = context.run(Mutation::DeleteLink(target))?;
        Ok(Some(LinkNode(link)))
    }

    fn delete_all_links(context: &Context) -> FieldResult<DeleteAllNode> {
        context.run(Mutation::DeleteAll(Collection::Links)).map(DeleteAllNode)
    }
}
