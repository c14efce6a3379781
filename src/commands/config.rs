use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "stackstats.toml";

/// Which layout a configured table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    /// Metrics as rows, releases as columns.
    GroupMetrics,

    /// People as rows, metrics as columns.
    UserMetrics,
}

/// One table definition from the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    /// Unique table name, also used as the rendered title.
    pub name: String,

    /// Table layout.
    pub kind: TableKind,

    /// Comma-separated user ids.
    pub people: String,

    /// Comma-separated releases; falls back to the top-level default when omitted.
    #[serde(default)]
    pub releases: Option<String>,

    /// Comma-separated metric keys.
    pub metrics: String,
}

/// Configuration file contents: an optional default release list plus table definitions.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Releases used by tables that do not set their own.
    #[serde(default)]
    pub releases: Option<String>,

    /// Table definitions, rendered in file order.
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Releases string for `table`, preferring its own over the top-level default.
    #[must_use]
    pub fn releases_for<'a>(&'a self, table: &'a TableDef) -> Option<&'a str> {
        table.releases.as_deref().or(self.releases.as_deref())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if no tables are defined, names collide, or a table has no releases
    fn validate(&self) -> Result<()> {
        if self.tables.is_empty() {
            return Err(app_err!("the configuration defines no tables"));
        }

        let mut seen = HashSet::new();
        for table in &self.tables {
            if table.name.trim().is_empty() {
                return Err(app_err!("a table definition has an empty name"));
            }

            if !seen.insert(table.name.as_str()) {
                return Err(app_err!("duplicate table name '{}'", table.name));
            }

            if self.releases_for(table).is_none() {
                return Err(app_err!(
                    "table '{}' names no releases and the configuration has no top-level default",
                    table.name
                ));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
