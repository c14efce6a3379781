//! Tabular contribution reports.
//!
//! Two layouts share one lifecycle: the query is validated at construction,
//! [`generate`](MetricsTable::generate) resolves registered users and fetches and
//! aggregates contribution records exactly once, and [`matrix`](MetricsTable::matrix)
//! is a pure read of the finished table afterwards.
//!
//! - [`GroupMetricsTable`]: metrics as rows, releases as columns, values aggregated
//!   across all registered people, plus a trailing `sum` row.
//! - [`UserMetricsTable`]: people as rows, metrics as columns, values summed over the
//!   requested releases; unregistered people render as blank cells.
//!
//! People the service does not know are dropped from aggregation, unless nobody in the
//! query is registered, which fails the whole table: with zero registered users there
//! is nothing to aggregate.

mod group;
mod query;
mod user;

pub use group::GroupMetricsTable;
pub use query::{ConfigurationError, Query, QueryField, SEPARATOR};
pub use user::UserMetricsTable;

use crate::metrics::{Metric, REVIEWS_FORMAT};
use crate::stats::{Contribution, GatewayError, StatsGateway};
use std::collections::HashSet;
use thiserror::Error;

const LOG_TARGET: &str = "tables";

/// A generated table: rectangular matrix of strings, header row first.
pub type Matrix = Vec<Vec<String>>;

/// Errors raised while generating a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// None of the requested people are registered; there is nothing to aggregate.
    #[error("none of the requested people are registered with the statistics service")]
    NoRegisteredUsers,

    /// The registration filter itself could not be queried.
    #[error("could not resolve registered users: {0}")]
    Gateway(#[from] GatewayError),
}

/// A tabular contribution report.
#[expect(async_fn_in_trait, reason = "table futures are awaited in place, never spawned")]
pub trait MetricsTable {
    /// Label of the top-left header cell.
    fn header_info(&self) -> &'static str;

    /// Fetch statistics and build the matrix.
    ///
    /// Call once per table; a repeated call rebuilds the matrix from scratch. Fails
    /// only when none of the requested people are registered or the registration
    /// filter cannot be reached; individual missing (user, release) records count as
    /// zero contribution.
    async fn generate<G: StatsGateway>(&mut self, gateway: &G) -> Result<(), TableError>;

    /// The generated matrix, header row first. Every row has the same length.
    ///
    /// # Panics
    ///
    /// Panics if called before [`generate`](Self::generate).
    fn matrix(&self) -> &[Vec<String>];
}

/// Resolve the registered subset of `people`, failing when it is empty.
pub(crate) async fn resolve_registered<G: StatsGateway>(gateway: &G, people: &[String]) -> Result<HashSet<String>, TableError> {
    let registered = gateway.registered_users(people).await?;

    for person in people {
        if !registered.contains(person) {
            log::info!(target: LOG_TARGET, "'{person}' is not registered with the statistics service");
        }
    }

    if registered.is_empty() {
        return Err(TableError::NoRegisteredUsers);
    }

    Ok(registered)
}

/// Fetch one contribution record, absorbing per-lookup failures as "no contribution".
pub(crate) async fn fetch_contribution<G: StatsGateway>(gateway: &G, user: &str, release: &str) -> Option<Contribution> {
    match gateway.contribution(user, release).await {
        Ok(record) => Some(record),
        Err(err @ GatewayError::NotFound { .. }) => {
            log::debug!(target: LOG_TARGET, "{err}");
            None
        }
        Err(err) => {
            log::warn!(target: LOG_TARGET, "dropping lookup for '{user}' in '{release}': {err}");
            None
        }
    }
}

/// Render one cell for `metric` from the aggregated `totals`.
pub(crate) fn format_cell(metric: Metric, totals: &Contribution) -> String {
    match metric.scalar(totals) {
        Some(value) => value.to_string(),
        None => {
            let marks: Vec<String> = REVIEWS_FORMAT.iter().map(|bucket| totals.mark(bucket).to_string()).collect();
            format!("({})", marks.join(", "))
        }
    }
}

/// Column total over the summable metrics of `totals`.
pub(crate) fn column_sum(metrics: &[Metric], totals: &Contribution) -> u64 {
    metrics
        .iter()
        .filter(|metric| metric.summable())
        .filter_map(|metric| metric.scalar(totals))
        .sum()
}


#[cfg(test)]
mod tests {
    use super::fakes::sample_contribution;
    use super::*;

    #[test]
    fn test_format_cell_scalar() {
        let totals = sample_contribution();
        assert_eq!(format_cell(Metric::CommitCount, &totals), "10");
        assert_eq!(format_cell(Metric::Loc, &totals), "1250");
    }

    #[test]
    fn test_format_cell_reviews_tuple() {
        let totals = sample_contribution();
        assert_eq!(format_cell(Metric::Reviews, &totals), "(1, 2, 30, 14, 4)");
    }

    #[test]
    fn test_format_cell_reviews_missing_buckets() {
        let totals = Contribution::default();
        assert_eq!(format_cell(Metric::Reviews, &totals), "(0, 0, 0, 0, 0)");
    }

    #[test]
    fn test_column_sum_skips_loc_and_reviews() {
        let totals = sample_contribution();
        let metrics = [Metric::CommitCount, Metric::Loc, Metric::Reviews, Metric::EmailCount];
        assert_eq!(column_sum(&metrics, &totals), 10 + 25);
    }

    #[test]
    fn test_column_sum_only_skipped_metrics_is_zero() {
        let totals = sample_contribution();
        assert_eq!(column_sum(&[Metric::Loc], &totals), 0);
        assert_eq!(column_sum(&[Metric::Reviews], &totals), 0);
    }
}
