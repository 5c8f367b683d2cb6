//! Loader for operations files.
//!
//! Parses `.graphql` files with step markers (`#: step_name`). Each step
//! holds one GraphQL document. `#@param $name = value` lines define
//! substitutions applied to that step's document.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ExampleError, ExampleResult};

const STEP_MARKER: &str = "#:";
const PARAM_MARKER: &str = "#@param ";

/// A parsed operations file.
#[derive(Debug, Clone)]
pub struct Operations {
    /// Map of step name to GraphQL document.
    pub steps: HashMap<String, String>,
    /// Steps in order of appearance.
    pub step_order: Vec<String>,
    /// Parameters per step (step name -> (param name -> value)).
    pub step_params: HashMap<String, HashMap<String, String>>,
}

#[derive(Default)]
struct Pending {
    name: Option<String>,
    content: String,
    params: HashMap<String, String>,
}

impl Pending {
    fn flush(&mut self, ops: &mut Operations) {
        let Some(name) = self.name.take() else {
            return;
        };
        let content = self.content.trim();
        if !content.is_empty() {
            ops.steps.insert(name.clone(), content.to_string());
        }
        if !self.params.is_empty() {
            ops.step_params
                .insert(name, std::mem::take(&mut self.params));
        }
        self.content.clear();
    }
}

impl Operations {
    /// Parse an operations file from a string.
    pub fn parse(source: &str) -> ExampleResult<Self> {
        let mut ops = Self {
            steps: HashMap::new(),
            step_order: Vec::new(),
            step_params: HashMap::new(),
        };
        let mut pending = Pending::default();

        for line in source.lines() {
            let trimmed = line.trim();

            if let Some(suffix) = trimmed.strip_prefix(STEP_MARKER) {
                pending.flush(&mut ops);

                let name = suffix.trim();
                if name.is_empty() {
                    return Err(ExampleError::operations_parse(
                        "<inline>",
                        "empty step name after #:",
                    ));
                }
                if ops.step_order.iter().any(|existing| existing == name) {
                    return Err(ExampleError::operations_parse(
                        "<inline>",
                        format!("duplicate step '{}'", name),
                    ));
                }
                ops.step_order.push(name.to_string());
                pending.name = Some(name.to_string());
            } else if pending.name.is_some() {
                if let Some(param) = trimmed.strip_prefix(PARAM_MARKER) {
                    if let Some((name, value)) = parse_param_def(param) {
                        pending.params.insert(name, value);
                    }
                } else {
                    pending.content.push_str(line);
                    pending.content.push('\n');
                }
            }
            // Lines before the first marker are file-level comments.
        }

        pending.flush(&mut ops);
        Ok(ops)
    }

    /// Load and parse an operations file from disk.
    pub fn load(path: &Path) -> ExampleResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ExampleError::file_read(path, e))?;
        Self::parse(&source).map_err(|e| ExampleError::operations_parse(path, e.to_string()))
    }

    /// Get the document for a step with parameters substituted.
    pub fn get_step(&self, name: &str) -> Option<String> {
        let document = self.steps.get(name)?;
        let Some(params) = self.step_params.get(name) else {
            return Some(document.clone());
        };
        let mut result = document.clone();
        for (param, value) in params {
            result = result.replace(&format!("${}", param), value);
        }
        Some(result)
    }

    /// Get all step names in order.
    pub fn step_names(&self) -> &[String] {
        &self.step_order
    }
}

/// Parse `$name = value` into `(name, value)`.
fn parse_param_def(s: &str) -> Option<(String, String)> {
    let (name, value) = s.split_once('=')?;
    let name = name.trim().trim_start_matches('$');
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_operations() {
        let source = r#"
# Event operations

#: list_events
{ events { id title } }

#: delete_launch
mutation {
  deleteEvent(title: "Launch") { id }
}
"#;

        let ops = Operations::parse(source).unwrap();

        assert_eq!(ops.step_names(), ["list_events", "delete_launch"]);
        assert_eq!(
            ops.get_step("list_events").unwrap(),
            "{ events { id title } }"
        );
        assert!(ops.get_step("delete_launch").unwrap().contains("deleteEvent"));
    }

    #[test]
    fn test_params_are_substituted() {
        let source = r#"
#: get_account
#@param $id = "2"
{ account(id: $id) { username } }
"#;

        let ops = Operations::parse(source).unwrap();

        let step = ops.get_step("get_account").unwrap();
        assert_eq!(step, r#"{ account(id: "2") { username } }"#);
    }

    #[test]
    fn test_graphql_comments_are_kept() {
        let source = "#: commented\n# just a comment\n{ links { id } }\n";

        let ops = Operations::parse(source).unwrap();

        assert!(ops.get_step("commented").unwrap().starts_with("# just"));
    }

    #[test]
    fn test_empty_step_name_is_rejected() {
        let result = Operations::parse("#:\n{ links { id } }\n");

        assert!(matches!(result, Err(ExampleError::OperationsParse { .. })));
    }

    #[test]
    fn test_duplicate_step_is_rejected() {
        let result = Operations::parse("#: a\n{ links { id } }\n#: a\n{ events { id } }\n");

        assert!(matches!(result, Err(ExampleError::OperationsParse { .. })));
    }
}
