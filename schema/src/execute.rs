//! Running GraphQL documents against a context.

use juniper::http::GraphQLRequest;
use juniper::InputValue;
use serde_json::{json, Value};
use tracing::debug;

use crate::context::Context;
use crate::Schema;

/// Execute a document and render the response as `{ "data", "errors" }` JSON.
pub fn execute(schema: &Schema, document: &str, context: &Context) -> Value {
    run(schema, document, None, context)
}

/// Execute a document with a JSON object of variables.
pub fn execute_with_variables(
    schema: &Schema,
    document: &str,
    variables: Value,
    context: &Context,
) -> Value {
    match serde_json::from_value::<InputValue>(variables) {
        Ok(variables) => run(schema, document, Some(variables), context),
        Err(err) => error_response(format!("invalid variables: {err}")),
    }
}

fn run(
    schema: &Schema,
    document: &str,
    variables: Option<InputValue>,
    context: &Context,
) -> Value {
    let request = GraphQLRequest::new(document.to_string(), None, variables);
    let response = request.execute_sync(schema, context);
    debug!(ok = response.is_ok(), "executed document");
    serde_json::to_value(&response)
        .unwrap_or_else(|err| error_response(format!("failed to render response: {err}")))
}

fn error_response(message: String) -> Value {
    json!({ "data": null, "errors": [{ "message": message }] })
}
