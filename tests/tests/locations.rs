//! Location mutations.

use gather_tests::prelude::*;

mod unknown_update {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("unknown_update")
            .seed("seeds/basic.json")
            .operations("operations/locations.graphql")
            .step("update_unknown", |a| a.not_found().null())
            .step("list_unchanged", |a| {
                a.count(2)
                    .field("0.name", "Hall")
                    .field("0.desc", "Main hall")
                    .field("1.name", "Park")
            })
    }

    #[test]
    fn test_update_unknown_location_leaves_store() {
        scenario().run().unwrap();
    }
}

mod location_lifecycle {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("location_lifecycle")
            .seed("seeds/basic.json")
            .operations("operations/locations.graphql")
            .step("update_coordinates", |a| {
                a.field("name", "Park")
                    .field("lat", 40.5)
                    .field("lng", 29.02)
            })
            .step("create_location", |a| {
                a.field("id", "new-1").field("name", "Pier").field("lat", 41.1)
            })
            .step("delete_by_name", |a| a.field("id", "1").field("name", "Hall"))
            .step("delete_all", |a| a.deleted(2))
            .step("list_after_clear", |a| a.count(0))
    }

    #[test]
    fn test_update_create_delete_and_clear() {
        scenario().run().unwrap();
    }
}
