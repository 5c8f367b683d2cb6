//! Gather Integration Test Framework
//!
//! Provides a fluent API for running GraphQL documents against a seeded
//! store and checking each response.
//!
//! # Structure
//!
//! - **fixtures/seeds/** - Starting datasets (JSON, same format as `--data`)
//! - **fixtures/operations/** - GraphQL documents split by `#: step_name` markers
//! - **tests/** - Scenarios (Rust: seed + operations + assertions)
//!
//! # Example
//!
//! ```ignore
//! use gather_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("events")
//!         .seed("seeds/basic.json")
//!         .operations("operations/events.graphql")
//!         .step("list_events", |a| a.count(3))
//!         .step("delete_launch", |a| a.field("id", "3"))
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod loader;
mod runner;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ExampleError, ExampleResult};
pub use loader::Operations;
pub use scenario::Scenario;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ExampleError, ExampleResult};
    pub use crate::scenario::Scenario;
    pub use serde_json::json;
}
