use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use minidb::Repl;
use tracing_subscriber::EnvFilter;

/// Single-table record store driven line by line from stdin.
#[derive(Parser, Debug)]
#[command(name = "db", version, about)]
struct Args {
    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "minidb=debug" } else { "minidb=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock());
    repl.run()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
