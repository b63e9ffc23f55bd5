//! `ruff format` hook: format all staged Python files in one run and stage
//! the result.

use crate::utils::{get_ruff_arguments, get_ruff_include, get_ruff_mode_config, select_staged_files};
use crate::{report_warnings, with_progress, Host};
use hook_common::{log_decision, CommandResult, HookDebugLog, PluginConfig, ReportProgress, Result, StatusEntry};

pub const HOOK_NAME: &str = "ruff-format";
pub const MODE: &str = "format";

pub const DEFAULT_ARGUMENTS: &[&str] = &[];

/// `[tool.autohooks.plugins.ruff.format]` when it sets `arguments`, else the
/// plugin table.
pub fn get_ruff_format_config(config: &PluginConfig) -> PluginConfig {
    get_ruff_mode_config(config, MODE)
}

/// Format the staged files and stage them again.
///
/// Returns 1 when ruff fails; nothing is staged in that case.
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
        host.terminal.ok("No staged files to format.");
        log_decision(host.repository.workdir(), HOOK_NAME, "", "skip", "no staged files");
        return Ok(0);
    }

    let mut args = vec![MODE.to_string()];
    args.extend(get_ruff_arguments(
        Some(&get_ruff_format_config(config)),
        DEFAULT_ARGUMENTS,
    ));
    args.extend(files.iter().map(|f| f.absolute_path().into_string()));

    with_progress(progress, |progress| -> Result<i32> {
        progress.init(files.len());

        let result = host.runner.run(&args)?;
        if !result.success {
            report_failure(host, &files, &result, progress);
            return Ok(1);
        }

        report_warnings(host, &result.stderr);
        let workdir = host.repository.workdir().to_owned();
        for file in &files {
            host.terminal.ok(&format!("Formatting {} was successful.", file.path));
            log_decision(&workdir, HOOK_NAME, file.path.as_str(), "ok", "formatted");
            progress.update();
        }

        host.repository.stage_files(&files)?;
        Ok(0)
    })
}

fn report_failure(
    host: &mut Host<'_>,
    files: &[StatusEntry],
    result: &CommandResult,
    progress: &mut dyn ReportProgress,
) {
    let workdir = host.repository.workdir().to_owned();
    let detail = if result.stderr.trim().is_empty() {
        result.stdout.trim()
    } else {
        result.stderr.trim()
    };

    for file in files {
        let message = match failure_detail(detail, file, files) {
            Some(detail) => format!("Failed formatting {}. {}", file.path, detail),
            None => format!("Failed formatting {}.", file.path),
        };
        host.terminal.error(&message);
        let mut log = HookDebugLog::new(HOOK_NAME, file.path.as_str())
            .with_decision("error", "ruff format failed");
        if !detail.is_empty() {
            log = log.with_context(detail);
        }
        let _ = log.write(&workdir);
        progress.update();
    }
}

/// The output lines naming `file`. When no line names any of the batch's
/// files, the whole output applies to every file.
fn failure_detail(detail: &str, file: &StatusEntry, files: &[StatusEntry]) -> Option<String> {
    if detail.is_empty() {
        return None;
    }

    let absolute = file.absolute_path();
    let own: Vec<&str> = detail
        .lines()
        .filter(|line| names_path(line, absolute.as_str()))
        .collect();
    if !own.is_empty() {
        return Some(own.join("\n"));
    }

    let names_any = files.iter().any(|f| {
        let absolute = f.absolute_path();
        detail.lines().any(|line| names_path(line, absolute.as_str()))
    });
    if names_any {
        None
    } else {
        Some(detail.to_string())
    }
}

/// Whether `line` mentions `path` followed by `:` or the end of the line.
fn names_path(line: &str, path: &str) -> bool {
    line.match_indices(path).any(|(start, _)| {
        let rest = &line[start + path.len()..];
        rest.is_empty() || rest.starts_with(':')
    })
}
