//! Plugin configuration loaded from `pyproject.toml`.

use crate::error::{HookError, Result};
use camino::Utf8Path;
use std::fs;
use std::io::ErrorKind;
use toml::{Table, Value};

/// A read-only view onto one table of the hook configuration.
///
/// Missing tables are represented as an empty view, so lookups can be
/// chained without checking every level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    table: Table,
}

impl PluginConfig {
    /// An empty configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML source.
    pub fn from_toml(source: &str) -> std::result::Result<Self, toml::de::Error> {
        let table: Table = toml::from_str(source)?;
        Ok(Self { table })
    }

    /// Load a configuration file. A missing file yields an empty config.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::empty()),
            Err(source) => {
                return Err(HookError::ReadConfig {
                    path: path.to_string(),
                    source,
                });
            }
        };

        Self::from_toml(&content).map_err(|source| HookError::ParseConfig {
            path: path.to_string(),
            source,
        })
    }

    /// Descend into nested tables. Non-table or missing nodes yield an
    /// empty config.
    pub fn get(&self, keys: &[&str]) -> PluginConfig {
        let mut current = &self.table;
        for key in keys {
            match current.get(*key) {
                Some(Value::Table(table)) => current = table,
                _ => return Self::empty(),
            }
        }
        Self {
            table: current.clone(),
        }
    }

    /// Look up a value in this table.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.table.get(key)
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
