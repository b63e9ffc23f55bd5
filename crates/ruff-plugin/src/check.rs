//! `ruff check` hook: lint each staged Python file separately.

use crate::diagnostic::{parse_output, OutputLine};
use crate::utils::{get_ruff_arguments, get_ruff_include, get_ruff_mode_config, select_staged_files};
use crate::{report_warnings, with_progress, Host};
use hook_common::{log_decision, CommandResult, HookDebugLog, PluginConfig, ReportProgress, Result, StatusEntry};

pub const HOOK_NAME: &str = "ruff-check";
pub const MODE: &str = "check";

/// Concise output is the one-line-per-diagnostic format parsed here.
pub const DEFAULT_ARGUMENTS: &[&str] = &["--output-format=concise"];

/// `[tool.autohooks.plugins.ruff.check]` when it sets `arguments`, else the
/// plugin table.
pub fn get_ruff_check_config(config: &PluginConfig) -> PluginConfig {
    get_ruff_mode_config(config, MODE)
}

/// Lint the staged files. Returns the number of files with issues.
pub fn precommit(
    host: &mut Host<'_>,
    config: Option<&PluginConfig>,
    progress: Option<&mut dyn ReportProgress>,
) -> Result<i32> {
    let empty = PluginConfig::empty();
    let config = config.unwrap_or(&empty);

    host.runner.ensure_installed()?;

    let files = select_staged_files(host.repository, &get_ruff_include(config, MODE))?;
    if files.is_empty() {
        host.terminal.ok("No staged files to lint.");
        log_decision(host.repository.workdir(), HOOK_NAME, "", "skip", "no staged files");
        return Ok(0);
    }

    let arguments = get_ruff_arguments(Some(&get_ruff_check_config(config)), DEFAULT_ARGUMENTS);

    with_progress(progress, |progress| -> Result<i32> {
        progress.init(files.len());

        let mut failed = 0;
        for file in &files {
            let mut args = vec![MODE.to_string()];
            args.extend(arguments.iter().cloned());
            args.push(file.absolute_path().into_string());

            let result = host.runner.run(&args)?;
            if !report_file(host, file, &result) {
                failed += 1;
            }
            progress.update();
        }

        Ok(failed)
    })
}

/// Report one file's ruff output. Returns whether the file passed.
fn report_file(host: &mut Host<'_>, file: &StatusEntry, result: &CommandResult) -> bool {
    let workdir = host.repository.workdir().to_owned();
    let output = parse_output(&result.stdout);

    for line in &output.lines {
        match line {
            OutputLine::Diagnostic(diagnostic) => host.terminal.error(&diagnostic.raw),
            OutputLine::Summary { line, .. } => host.terminal.out(line),
            OutputLine::Other(line) => host.terminal.out(line),
            OutputLine::Passed => {
                let _ = HookDebugLog::new(HOOK_NAME, file.path.as_str())
                    .with_decision("ignored", "All checks passed!")
                    .write(&workdir);
            }
        }
    }

    if result.success && !output.has_diagnostics() {
        report_warnings(host, &result.stderr);
        host.terminal.ok(&format!("Linting {} was successful.", file.path));
        log_decision(&workdir, HOOK_NAME, file.path.as_str(), "ok", "no diagnostics");
        return true;
    }

    let stderr = result.stderr.trim();
    let exit_code = result
        .exit_code
        .map_or_else(|| "unknown".to_string(), |c| c.to_string());
    if !output.has_diagnostics() {
        if stderr.is_empty() {
            host.terminal.error(&format!(
                "Linting {} failed: {} exited with code {}.",
                file.path,
                host.runner.program(),
                exit_code
            ));
        } else {
            stderr.lines().for_each(|line| host.terminal.error(line));
        }
    }

    let reason = match output.error_count() {
        Some(count) => format!("{} error(s) reported", count),
        None => format!("exit code {}", exit_code),
    };
    let context = if output.has_diagnostics() {
        output
            .diagnostics()
            .map(|d| d.raw.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        stderr.to_string()
    };
    let mut log = HookDebugLog::new(HOOK_NAME, file.path.as_str()).with_decision("error", &reason);
    if !context.is_empty() {
        log = log.with_context(&context);
    }
    let _ = log.write(&workdir);
    false
}
