//! Event mutations.

use gather_tests::prelude::*;

mod create_event {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("create_event")
            .seed("seeds/basic.json")
            .operations("operations/events.graphql")
            .step("create_event", |a| {
                a.field("id", "new-1")
                    .field("title", "Meetup")
                    .field("owner_id", "2")
                    .field("location_id", "1")
            })
            .step("create_second_event", |a| a.field("id", "new-2"))
            // each new record lands at the end of the collection
            .step("list_after_create", |a| {
                a.count(7).field("5.id", "new-1").field("6.id", "new-2")
            })
            .step("new_event_owner", |a| {
                a.field("owner.username", "bob").field("location.name", "Hall")
            })
    }

    #[test]
    fn test_create_event_gets_fresh_id_and_appends() {
        scenario().run().unwrap();
    }
}

mod delete_by_title {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("delete_by_title")
            .seed("seeds/basic.json")
            .operations("operations/events.graphql")
            .step("delete_launch_by_title", |a| {
                a.field("id", "1").field("desc", "Product launch")
            })
            .step("list_after_delete", |a| {
                a.count(4)
                    .field("0.id", "2")
                    .field("1.id", "3")
                    .field("1.title", "Launch")
            })
            .step("delete_launch_by_title", |a| {
                a.field("id", "3").field("desc", "Second launch")
            })
    }

    #[test]
    fn test_first_title_match_wins() {
        scenario().run().unwrap();
    }
}

mod delete_id_or_title {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("delete_id_or_title")
            .seed("seeds/basic.json")
            .operations("operations/events.graphql")
            // event 2 precedes the remaining "Launch" so it is the first match
            .step("delete_launch_by_title", |a| a.field("id", "1"))
            .step("delete_id_wins_over_later_title", |a| {
                a.field("id", "2").field("title", "Workshop")
            })
    }

    #[test]
    fn test_either_key_matches_in_insertion_order() {
        scenario().run().unwrap();
    }
}

mod update_event {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("update_event")
            .seed("seeds/basic.json")
            .operations("operations/events.graphql")
            .step("update_title", |a| {
                a.field("id", "3")
                    .field("title", "Relaunch")
                    .field("desc", "Second launch")
                    .field("owner_id", "3")
            })
            .step("update_missing", |a| a.not_found().null())
            .step("delete_all", |a| a.deleted(5))
            .step("list_after_clear", |a| a.count(0))
    }

    #[test]
    fn test_update_merges_and_clear_empties() {
        scenario().run().unwrap();
    }
}
