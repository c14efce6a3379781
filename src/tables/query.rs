//! Query parsing and validation.

use crate::metrics::Metric;
use strum::Display;
use thiserror::Error;

/// Separator for the people/releases/metrics query strings.
pub const SEPARATOR: char = ',';

/// Query field names, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum QueryField {
    People,
    Releases,
    Metrics,
}

/// Rejected query input.
///
/// Raised while constructing a table, before any service contact; fix the input and
/// construct again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The field was missing or contained no entries.
    #[error("the '{0}' query must not be empty")]
    Empty(QueryField),

    /// A leading, trailing, or doubled separator produced an empty entry.
    #[error("the '{0}' query contains an empty entry")]
    EmptyEntry(QueryField),

    /// A metric key not present in the catalog.
    #[error("unknown metric '{0}'")]
    UnknownMetric(String),
}

/// A validated table query.
///
/// Entry order follows the input strings and is preserved through to the rendered
/// matrix; duplicates keep their first occurrence.
#[derive(Debug, Clone)]
pub struct Query {
    people: Vec<String>,
    releases: Vec<String>,
    metrics: Vec<Metric>,
}

impl Query {
    /// Parse and validate the three raw query strings.
    pub fn parse(people: &str, releases: &str, metrics: &str) -> Result<Self, ConfigurationError> {
        let people = split_entries(QueryField::People, people)?;
        let releases = split_entries(QueryField::Releases, releases)?;
        let metric_keys = split_entries(QueryField::Metrics, metrics)?;

        let mut parsed = Vec::with_capacity(metric_keys.len());
        for key in metric_keys {
            let Ok(metric) = key.parse::<Metric>() else {
                return Err(ConfigurationError::UnknownMetric(key));
            };
            if !parsed.contains(&metric) {
                parsed.push(metric);
            }
        }

        Ok(Self {
            people,
            releases,
            metrics: parsed,
        })
    }

    /// Requested user ids, in input order.
    #[must_use]
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// Requested releases, in input order.
    #[must_use]
    pub fn releases(&self) -> &[String] {
        &self.releases
    }

    /// Requested metrics, in input order.
    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }
}

/// Split a raw comma-separated field, rejecting empty fields and empty entries.
fn split_entries(field: QueryField, raw: &str) -> Result<Vec<String>, ConfigurationError> {
    if raw.trim().is_empty() {
        return Err(ConfigurationError::Empty(field));
    }

    let mut entries: Vec<String> = Vec::new();
    for entry in raw.split(SEPARATOR) {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(ConfigurationError::EmptyEntry(field));
        }
        if !entries.iter().any(|seen| seen == entry) {
            entries.push(entry.to_string());
        }
    }

    Ok(entries)
}
