//! Record structures for Gather.
//!
//! Four record types make up the data model. Only `id` is mandatory; every
//! other field may be absent because create accepts a partial field set.
//! Foreign keys (`owner_id`, `location_id`, `account_id`, `event_id`) are
//! stored as given and never validated.

use crate::{Collection, Lookup, Record, RecordId};
use serde::{Deserialize, Deserializer, Serialize};

/// A patch field: `None` when absent, `Some(None)` for an explicit null.
pub type Change<T> = Option<Option<T>>;

/// Deserialize a field that is present in the input, `null` included.
fn present<'de, D, T>(deserializer: D) -> Result<Change<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// One lookup per label field of a collection keyed by a single string.
fn label_lookups(collection: Collection, value: &str) -> Vec<Lookup> {
    collection
        .label_fields()
        .iter()
        .map(|field| Lookup::field(*field, value))
        .collect()
}

/// Overlay every present field of a patch onto a record. An explicit null
/// clears the field.
macro_rules! merge_fields {
    ($record:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $record.$field = value;
            }
        )+
    };
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Partial account fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub username: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Change<String>,
}

impl Record for Account {
    const COLLECTION: Collection = Collection::Accounts;
    type Patch = AccountPatch;
    type Key = String;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_patch(id: RecordId, patch: AccountPatch) -> Self {
        Self {
            id,
            username: patch.username.flatten(),
            email: patch.email.flatten(),
        }
    }

    fn merge(&mut self, patch: AccountPatch) {
        merge_fields!(self, patch; username, email);
    }

    fn matches_key(&self, username: &String) -> bool {
        self.username.as_deref() == Some(username.as_str())
    }

    fn key_lookups(username: &String) -> Vec<Lookup> {
        label_lookups(Self::COLLECTION, username)
    }
}

/// A scheduled event, owned by an account and held at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<RecordId>,
    #[serde(default, alias = "user_id", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<RecordId>,
}

/// Partial event fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub desc: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub date: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub from: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub to: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub location_id: Change<RecordId>,
    #[serde(
        default,
        alias = "user_id",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_id: Change<RecordId>,
}

impl Record for Event {
    const COLLECTION: Collection = Collection::Events;
    type Patch = EventPatch;
    type Key = String;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_patch(id: RecordId, patch: EventPatch) -> Self {
        Self {
            id,
            title: patch.title.flatten(),
            desc: patch.desc.flatten(),
            date: patch.date.flatten(),
            from: patch.from.flatten(),
            to: patch.to.flatten(),
            location_id: patch.location_id.flatten(),
            owner_id: patch.owner_id.flatten(),
        }
    }

    fn merge(&mut self, patch: EventPatch) {
        merge_fields!(self, patch; title, desc, date, from, to, location_id, owner_id);
    }

    fn matches_key(&self, title: &String) -> bool {
        self.title.as_deref() == Some(title.as_str())
    }

    fn key_lookups(title: &String) -> Vec<Lookup> {
        label_lookups(Self::COLLECTION, title)
    }
}

/// A place where events are held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Partial location fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub desc: Change<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lat: Change<f64>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lng: Change<f64>,
}

impl Record for Location {
    const COLLECTION: Collection = Collection::Locations;
    type Patch = LocationPatch;
    type Key = String;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_patch(id: RecordId, patch: LocationPatch) -> Self {
        Self {
            id,
            name: patch.name.flatten(),
            desc: patch.desc.flatten(),
            lat: patch.lat.flatten(),
            lng: patch.lng.flatten(),
        }
    }

    fn merge(&mut self, patch: LocationPatch) {
        merge_fields!(self, patch; name, desc, lat, lng);
    }

    fn matches_key(&self, name: &String) -> bool {
        self.name.as_deref() == Some(name.as_str())
    }

    fn key_lookups(name: &String) -> Vec<Lookup> {
        label_lookups(Self::COLLECTION, name)
    }
}

/// An account attending an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLink {
    pub id: RecordId,
    #[serde(default, alias = "user_id", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<RecordId>,
}

/// Partial attendance link fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkPatch {
    #[serde(
        default,
        alias = "user_id",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Change<RecordId>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub event_id: Change<RecordId>,
}

/// Alternate delete key for attendance links: either foreign key may match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkKey {
    pub account_id: Option<RecordId>,
    pub event_id: Option<RecordId>,
}

impl LinkKey {
    /// `None` when neither foreign key is given.
    pub fn from_parts(account_id: Option<RecordId>, event_id: Option<RecordId>) -> Option<Self> {
        if account_id.is_none() && event_id.is_none() {
            None
        } else {
            Some(Self {
                account_id,
                event_id,
            })
        }
    }
}

impl Record for AttendanceLink {
    const COLLECTION: Collection = Collection::Links;
    type Patch = LinkPatch;
    type Key = LinkKey;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_patch(id: RecordId, patch: LinkPatch) -> Self {
        Self {
            id,
            account_id: patch.account_id.flatten(),
            event_id: patch.event_id.flatten(),
        }
    }

    fn merge(&mut self, patch: LinkPatch) {
        merge_fields!(self, patch; account_id, event_id);
    }

    fn matches_key(&self, key: &LinkKey) -> bool {
        let account_match = key.account_id.is_some() && self.account_id == key.account_id;
        let event_match = key.event_id.is_some() && self.event_id == key.event_id;
        account_match || event_match
    }

    fn key_lookups(key: &LinkKey) -> Vec<Lookup> {
        Self::COLLECTION
            .label_fields()
            .iter()
            .zip([&key.account_id, &key.event_id])
            .filter_map(|(field, value)| value.as_ref().map(|id| Lookup::field(*field, id.as_str())))
            .collect()
    }
}
