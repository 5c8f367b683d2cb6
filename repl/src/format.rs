//! Output formatting utilities for the REPL.

use serde_json::Value;

/// Render a response as pretty JSON.
pub fn format_response(response: &Value) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
}

/// Print help information.
pub fn print_help() {
    println!("Gather REPL Commands:");
    println!("  \\i <file>      Run a GraphQL document from a file");
    println!("  \\dc            Show record counts");
    println!("  verbose        Toggle verbose mode");
    println!("  help, \\h       Show this help");
    println!("  quit, \\q       Exit");
    println!();
    println!("Enter a GraphQL document and finish it with a blank line:");
    println!("  {{ events {{ id title owner {{ username }} }} }}");
    println!("  mutation {{ deleteEvent(title: \"Launch\") {{ id }} }}");
}
