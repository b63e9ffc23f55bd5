//! Pre-commit hook: Format staged Python files with `ruff format`.
//!
//! Formats all staged files in a single ruff run and adds them to the
//! index again. Nothing is staged when formatting fails.

use anyhow::Result;
use clap::Parser;
use ruff_plugin::cli::{exit_status, run, HookArgs, Mode};

/// Format staged Python files with ruff
#[derive(Debug, Parser)]
#[command(name = "ruff-format", version)]
struct Cli {
    #[command(flatten)]
    hook: HookArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = run(Mode::Format, &cli.hook)?;
    if code != 0 {
        std::process::exit(exit_status(code));
    }

    Ok(())
}
