//! Gather - run GraphQL documents against an in-memory event store.
//!
//! Usage: `gather [-v] [--data <file.json>] [<query.graphql> ...]`

use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use gather_repl::{Repl, ReplError, ReplResult};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the dataset when `--data` is absent.
const DATA_ENV: &str = "GATHER_DATA";

#[derive(Debug, Default)]
struct Args {
    help: bool,
    verbose: bool,
    data: Option<PathBuf>,
    files: Vec<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--verbose" => parsed.verbose = true,
            "-d" | "--data" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("{} expects a file path", arg))?;
                parsed.data = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                parsed.help = true;
                return Ok(parsed);
            }
            _ => parsed.files.push(PathBuf::from(arg)),
        }
    }

    if parsed.data.is_none() {
        parsed.data = env::var_os(DATA_ENV).map(PathBuf::from);
    }

    Ok(parsed)
}

fn usage() -> String {
    "usage: gather [-v] [--data <file.json>] [<query.graphql> ...]".to_string()
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gather=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gather=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> ReplResult<()> {
    let mut repl = match &args.data {
        Some(path) => Repl::from_dataset_path(path)?,
        None => Repl::new(),
    };
    repl.set_verbose(args.verbose);

    for file in &args.files {
        repl.run_file(Path::new(file))?;
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        repl.interactive();
    } else if args.files.is_empty() {
        let mut input = String::new();
        stdin
            .lock()
            .read_to_string(&mut input)
            .map_err(ReplError::Stdin)?;
        repl.run_script(&input);
    }

    Ok(())
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n{}", message, usage());
            process::exit(2);
        }
    };

    if args.help {
        println!("{}", usage());
        return;
    }

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
