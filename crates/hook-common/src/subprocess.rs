//! Subprocess execution utilities.

use crate::error::{HookError, Result};
use camino::Utf8Path;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Result of a command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal)
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
}

impl CommandResult {
    /// Create from std::process::Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        }
    }
}

/// Run `program` with `args`, capturing both output streams.
///
/// A non-zero exit status is not an error; only a failure to start the
/// process is.
pub fn run_program<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    dir: Option<&Utf8Path>,
) -> Result<CommandResult> {
    let mut expression = duct::cmd(program, args.iter().map(|a| a.as_ref().to_os_string()))
        .stdout_capture()
        .stderr_capture()
        .unchecked();
    if let Some(dir) = dir {
        expression = expression.dir(dir.as_std_path());
    }

    let output = expression.run().map_err(|source| HookError::Spawn {
        command: display_command(program, args),
        source,
    })?;

    Ok(CommandResult::from_output(output))
}

/// Check if a command exists, either as an explicit path or on PATH.
pub fn command_exists(program: &str) -> bool {
    find_program(program).is_some()
}

/// Resolve `program` to an executable file.
pub fn find_program(program: &str) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        executable_names(program)
            .into_iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn executable_names(program: &str) -> Vec<String> {
    if cfg!(target_os = "windows") {
        vec![program.to_string(), format!("{}.exe", program)]
    } else {
        vec![program.to_string()]
    }
}

fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().to_string()));
    parts.join(" ")
}
