//! Configuration resolution shared by the check and format hooks.

use glob::Pattern;
use hook_common::subprocess::command_exists;
use hook_common::{HookError, PluginConfig, Repository, Result, StatusEntry};
use toml::Value;

/// Location of the plugin table inside `pyproject.toml`.
pub const PLUGIN_KEYS: [&str; 4] = ["tool", "autohooks", "plugins", "ruff"];

/// Files handed to ruff unless `include` is configured.
pub const DEFAULT_INCLUDE: &[&str] = &["*.py"];

/// The `[tool.autohooks.plugins.ruff]` table, empty when absent.
pub fn get_ruff_config(config: &PluginConfig) -> PluginConfig {
    config.get(&PLUGIN_KEYS)
}

/// The mode table (`check`, `format`) when it sets `arguments`, else the
/// plugin table.
pub fn get_ruff_mode_config(config: &PluginConfig, mode: &str) -> PluginConfig {
    let ruff_config = get_ruff_config(config);
    let mode_config = ruff_config.get(&[mode]);
    if mode_config.has_value("arguments") {
        mode_config
    } else {
        ruff_config
    }
}

/// Arguments from `config`, or `defaults` when none are configured.
///
/// A single string is accepted in place of a list.
pub fn get_ruff_arguments(config: Option<&PluginConfig>, defaults: &[&str]) -> Vec<String> {
    match config.and_then(|c| c.get_value("arguments")) {
        Some(value) => value_to_strings(value),
        None => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

/// Include patterns for `mode`: mode table, then plugin table, then the
/// defaults.
pub fn get_ruff_include(config: &PluginConfig, mode: &str) -> Vec<String> {
    let ruff_config = get_ruff_config(config);
    let mode_config = ruff_config.get(&[mode]);

    mode_config
        .get_value("include")
        .or_else(|| ruff_config.get_value("include"))
        .map(value_to_strings)
        .unwrap_or_else(|| DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect())
}

fn value_to_strings(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_to_string).collect(),
        other => vec![value_to_string(other)],
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fail unless `program` can be executed.
pub fn check_ruff_installed(program: &str) -> Result<()> {
    if command_exists(program) {
        Ok(())
    } else {
        Err(HookError::ToolNotInstalled {
            program: program.to_string(),
        })
    }
}

/// Staged files matching any of the `include` patterns, in index order.
pub fn select_staged_files(
    repository: &dyn Repository,
    include: &[String],
) -> Result<Vec<StatusEntry>> {
    let patterns = compile_patterns(include);
    let files = repository.staged_status()?;
    Ok(files
        .into_iter()
        .filter(|file| matches_any(&patterns, file))
        .collect())
}

fn compile_patterns(include: &[String]) -> Vec<Pattern> {
    include
        .iter()
        .filter_map(|p| {
            Pattern::new(p)
                .or_else(|_| Pattern::new(&Pattern::escape(p)))
                .ok()
        })
        .collect()
}

fn matches_any(patterns: &[Pattern], file: &StatusEntry) -> bool {
    patterns.iter().any(|pattern| {
        pattern.matches(file.path.as_str())
            || file.path.file_name().is_some_and(|name| pattern.matches(name))
    })
}
