//! Listing and single-record lookups against the basic seed.

use gather_tests::prelude::*;

mod listing {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("listing")
            .seed("seeds/basic.json")
            .operations("operations/queries.graphql")
            .step("list_accounts", |a| {
                a.count(3)
                    .field("0.id", "1")
                    .field("0.username", "ada")
                    .field("2.email", "cy@example.com")
            })
            // user_id in the seed lands on owner_id; integer ids come back as strings
            .step("list_events", |a| {
                a.count(5)
                    .field("0.owner_id", "1")
                    .field("3.location_id", "7")
                    .absent("4.owner_id")
            })
            .step("list_locations", |a| {
                a.count(2).field("0.name", "Hall").field("0.lat", 41.01)
            })
            .step("list_links", |a| {
                a.count(4)
                    .field("3.account_id", "1")
                    .field("3.event_id", "3")
            })
    }

    #[test]
    fn test_lists_follow_insertion_order() {
        scenario().run().unwrap();
    }
}

mod single_lookup {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("single_lookup")
            .seed("seeds/basic.json")
            .operations("operations/queries.graphql")
            .step("get_account", |a| a.field("id", "2").field("username", "bob"))
            .step("get_event", |a| {
                a.field("title", "Workshop")
                    .field("from", "13:00")
                    .field("to", "17:00")
            })
            .step("get_link", |a| {
                a.field("account_id", "3").field("event_id", "2")
            })
    }

    #[test]
    fn test_lookup_by_id() {
        scenario().run().unwrap();
    }
}

mod missing_records {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("missing_records")
            .seed("seeds/basic.json")
            .operations("operations/queries.graphql")
            .step("get_missing_account", |a| a.not_found().null())
            .step("get_missing_location", |a| a.not_found().null())
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        scenario().run().unwrap();
    }
}

mod missing_record_message {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("missing_record_message")
            .seed("seeds/basic.json")
            .operations("operations/queries.graphql")
            .step("get_missing_account", |a| a.error("account not found: id=42"))
            .step("get_missing_location", |a| {
                a.error_matches(r"^location not found: id=\d+$")
            })
    }

    #[test]
    fn test_not_found_names_collection_and_key() {
        scenario().run().unwrap();
    }
}

mod empty_store {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("empty_store")
            .seed("seeds/empty.json")
            .operations("operations/queries.graphql")
            .step("list_accounts", |a| a.count(0))
            .step("list_events", |a| a.count(0))
            .step("list_locations", |a| a.count(0))
            .step("list_links", |a| a.count(0))
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        scenario().run().unwrap();
    }
}
