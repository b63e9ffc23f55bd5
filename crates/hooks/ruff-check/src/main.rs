//! Pre-commit hook: Lint staged Python files with `ruff check`.
//!
//! Runs ruff once per staged file and prints every diagnostic.
//! Exits with the number of files that have issues.

use anyhow::Result;
use clap::Parser;
use ruff_plugin::cli::{exit_status, run, HookArgs, Mode};

/// Lint staged Python files with ruff
#[derive(Debug, Parser)]
#[command(name = "ruff-check", version)]
struct Cli {
    #[command(flatten)]
    hook: HookArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = run(Mode::Check, &cli.hook)?;
    if code != 0 {
        std::process::exit(exit_status(code));
    }

    Ok(())
}
