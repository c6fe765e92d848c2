use std::{io::IsTerminal, process::ExitCode};

use clap::Parser;
use polycat::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

/// Route `tracing` events to stderr.
///
/// `RUST_LOG` wins when set; otherwise `-v` enables debug output, which
/// includes every default attribute skipped during resolution.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match polycat::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
