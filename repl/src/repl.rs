//! Core REPL state and execution.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use gather_schema::{execute, schema, Context, Schema};
use gather_session::Session;
use gather_store::{Dataset, Store, StoreCounts};
use serde_json::Value;
use tracing::info;

use crate::error::{ReplError, ReplResult};
use crate::format::{format_response, print_help};

/// REPL state.
pub struct Repl {
    schema: Schema,
    context: Context,
    verbose: bool,
}

impl Repl {
    /// Create a REPL over an empty store.
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    /// Create a REPL over an existing session.
    pub fn with_session(session: Session) -> Self {
        Self {
            schema: schema(),
            context: Context::new(session),
            verbose: false,
        }
    }

    /// Create a REPL seeded from a dataset file.
    pub fn from_dataset_path(path: &Path) -> ReplResult<Self> {
        let dataset = Dataset::from_path(path)?;
        Ok(Self::with_session(Session::with_store(Store::from_dataset(
            dataset,
        ))))
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Toggle verbose mode.
    pub fn toggle_verbose(&mut self) {
        self.verbose = !self.verbose;
        println!("Verbose mode: {}", self.verbose);
    }

    /// Current record counts.
    pub fn counts(&self) -> StoreCounts {
        self.context.session().store().counts()
    }

    /// Execute one GraphQL document and return the JSON response.
    pub fn execute(&self, document: &str) -> Value {
        execute(&self.schema, document, &self.context)
    }

    /// Execute one GraphQL document and print the response.
    pub fn run_document(&self, document: &str) -> Value {
        let response = self.execute(document);
        println!("{}", format_response(&response));
        if self.verbose {
            eprintln!("  {}", self.counts());
        }
        response
    }

    /// Run a file holding one GraphQL document.
    pub fn run_file(&self, path: &Path) -> ReplResult<Value> {
        let content = fs::read_to_string(path).map_err(|e| ReplError::read(path, e))?;
        info!(path = %path.display(), "running document");
        Ok(self.run_document(&content))
    }

    /// Run a whole script as one document. Blank input is skipped.
    pub fn run_script(&self, content: &str) -> Option<Value> {
        if content.trim().is_empty() {
            return None;
        }
        Some(self.run_document(content))
    }

    /// Interactive loop: one document per blank-line-terminated block.
    pub fn interactive(&mut self) {
        println!("Gather REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands, 'quit' to exit");
        println!();

        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            prompt("gather> ");

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    break;
                }
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.to_lowercase().as_str() {
                "quit" | "exit" | "\\q" => break,
                "help" | "\\h" => {
                    print_help();
                    continue;
                }
                "counts" | "\\dc" => {
                    println!("{}", self.counts());
                    continue;
                }
                "verbose" => {
                    self.toggle_verbose();
                    continue;
                }
                _ => {}
            }

            if let Some(path) = trimmed.strip_prefix("\\i ") {
                if let Err(e) = self.run_file(Path::new(path.trim())) {
                    eprintln!("Error: {}", e);
                }
                continue;
            }

            match read_block(&mut input, &line, || prompt("....> ")) {
                Ok(document) => {
                    self.run_document(&document);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    break;
                }
            }
        }

        println!("Goodbye!");
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    // A failed flush only loses the prompt.
    let _ = io::stdout().flush();
}

/// Collect lines after `first` until a blank line or end of input.
pub(crate) fn read_block<R: BufRead>(
    reader: &mut R,
    first: &str,
    mut on_continue: impl FnMut(),
) -> io::Result<String> {
    let mut block = String::from(first.trim_end());
    block.push('\n');

    loop {
        on_continue();
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }
        block.push_str(line.trim_end());
        block.push('\n');
    }

    Ok(block)
}
