//! Translation of session errors into GraphQL field errors.

use gather_session::SessionError;
use juniper::{FieldError, Object, Value};

/// Extension code carried by not-found field errors.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Convert a session error into a field error.
///
/// Not-found outcomes carry `code: NOT_FOUND` plus the collection name;
/// anything else is reported as `INTERNAL`.
pub fn field_error(err: SessionError) -> FieldError {
    let mut extensions = Object::with_capacity(2);
    match err.not_found() {
        Some((collection, _)) => {
            extensions.add_field("code", Value::scalar(NOT_FOUND.to_string()));
            extensions.add_field("collection", Value::scalar(collection.name().to_string()));
        }
        None => {
            extensions.add_field("code", Value::scalar("INTERNAL".to_string()));
        }
    }
    FieldError::new(err, Value::object(extensions))
}
