//! Scenario runner.

use gather_core::SequentialIds;
use gather_schema::{execute, schema, Context};
use gather_session::Session;
use gather_store::{Dataset, Store};

use crate::error::{ExampleError, ExampleResult};
use crate::loader::Operations;
use crate::scenario::Scenario;

/// Runs a scenario against a fresh session.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    operations: Operations,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> ExampleResult<Self> {
        let operations = scenario.load_operations()?;
        Ok(Self {
            scenario,
            operations,
        })
    }

    /// Run the scenario.
    pub fn run(&self) -> ExampleResult<()> {
        // 1. Seed the store
        let store = match self.scenario.seed_path() {
            Some(path) => Store::from_dataset(Dataset::from_path(&path)?),
            None => Store::new(),
        };

        // 2. Create a session with deterministic ids
        let ids = SequentialIds::new(self.scenario.ids());
        let context = Context::new(Session::with_ids(store, Box::new(ids)));
        let schema = schema();

        // 3. Execute each step in order and verify its assertion
        for step in self.scenario.steps() {
            let document = self
                .operations
                .get_step(&step.name)
                .ok_or_else(|| ExampleError::step_not_found(&step.name))?;

            let response = execute(&schema, &document, &context);
            step.assertion.verify(&step.name, &response)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::scenario::Scenario;

    #[test]
    fn test_runner_with_inline_operations() {
        let ops_source = r#"
#: create
mutation { createAccount(data: {username: "ada"}) { id username } }

#: list
{ accounts { id } }
"#;

        let scenario = Scenario::new("inline")
            .operations_source(ops_source)
            .unwrap()
            .step("create", |a| a.field("id", "new-1").field("username", "ada"))
            .step("list", |a| a.count(1));

        scenario.run().unwrap();
    }

    #[test]
    fn test_unknown_step_is_reported() {
        let scenario = Scenario::new("missing")
            .operations_source("#: present\n{ links { id } }\n")
            .unwrap()
            .step("absent", |a| a.count(0));

        let result = scenario.run();

        assert!(matches!(
            result,
            Err(crate::ExampleError::StepNotFound { .. })
        ));
    }
}
