//! Lazy relationship resolution on events and attendance links.

use gather_tests::prelude::*;

mod event_relations {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("event_relations")
            .seed("seeds/basic.json")
            .operations("operations/relationships.graphql")
            .step("event_with_relations", |a| {
                a.field("owner.username", "ada")
                    .field("location.name", "Hall")
                    .field("attendees", json!([{"account_id": "1"}, {"account_id": "2"}]))
            })
            .step("event_without_attendees", |a| a.field("attendees", json!([])))
            .step("attendee_accounts", |a| {
                a.field("attendees.0.account.username", "ada")
                    .field("attendees.1.account.username", "bob")
            })
    }

    #[test]
    fn test_owner_location_and_attendees_resolve() {
        scenario().run().unwrap();
    }
}

mod dangling_keys {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("dangling_keys")
            .seed("seeds/basic.json")
            .operations("operations/relationships.graphql")
            .step("event_with_dangling_owner", |a| {
                a.not_found().field("title", "Orphan").absent("owner")
            })
            .step("event_with_dangling_location", |a| {
                a.not_found().field("title", "Orphan").absent("location")
            })
            .step("event_with_unset_owner", |a| {
                a.not_found().field("title", "Draft").absent("owner")
            })
    }

    #[test]
    fn test_dangling_parent_is_not_found_without_losing_data() {
        scenario().run().unwrap();
    }
}

mod dangling_messages {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("dangling_messages")
            .seed("seeds/basic.json")
            .operations("operations/relationships.graphql")
            .step("event_with_dangling_owner", |a| a.error("account not found: id=99"))
            .step("event_with_dangling_location", |a| {
                a.error("location not found: id=7")
            })
            .step("event_with_unset_owner", |a| {
                a.error("account not found: owner_id is unset")
            })
    }

    #[test]
    fn test_dangling_parent_messages() {
        scenario().run().unwrap();
    }
}

mod partial_list {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("partial_list")
            .seed("seeds/basic.json")
            .operations("operations/relationships.graphql")
            .step("events_with_owners", |a| {
                a.not_found()
                    .count(5)
                    .field("0.owner.username", "ada")
                    .field("2.owner.username", "cy")
                    .absent("3.owner")
                    .absent("4.owner")
            })
    }

    #[test]
    fn test_failed_owner_nulls_only_that_field() {
        scenario().run().unwrap();
    }
}

mod link_relations {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("link_relations")
            .seed("seeds/basic.json")
            .operations("operations/relationships.graphql")
            .step("link_with_relations", |a| {
                a.field("account.username", "cy")
                    .field("event.title", "Workshop")
            })
    }

    #[test]
    fn test_link_resolves_account_and_event() {
        scenario().run().unwrap();
    }
}
