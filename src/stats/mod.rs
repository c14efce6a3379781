//! Statistics service gateway.
//!
//! The [`StatsGateway`] trait is the seam between the table engine and the remote
//! contribution-statistics service: a registration filter over candidate user ids and a
//! per-(user, release) contribution lookup. [`StatsClient`] is the production
//! implementation against the service's HTTP JSON API; tests substitute fakes.

mod client;

pub use client::{DEFAULT_BASE_URL, StatsClient};

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Per-(user, release) bundle of contribution counters.
///
/// Deserialized from the service's contribution endpoint; counters the service omits
/// default to zero. Also serves as the aggregation accumulator via [`absorb`](Self::absorb).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Contribution {
    #[serde(default)]
    pub commit_count: u64,

    #[serde(default)]
    pub completed_blueprint_count: u64,

    #[serde(default)]
    pub drafted_blueprint_count: u64,

    #[serde(default)]
    pub email_count: u64,

    #[serde(default)]
    pub filed_bug_count: u64,

    #[serde(default)]
    pub loc: u64,

    #[serde(default)]
    pub patch_set_count: u64,

    #[serde(default)]
    pub resolved_bug_count: u64,

    /// Review mark buckets, keyed by mark (`-2`, `-1`, `1`, `2`, `A`, ...).
    #[serde(default)]
    pub marks: BTreeMap<String, u64>,
}

impl Contribution {
    /// Add every counter of `other` into `self`, merging review marks per bucket.
    pub fn absorb(&mut self, other: &Self) {
        self.commit_count += other.commit_count;
        self.completed_blueprint_count += other.completed_blueprint_count;
        self.drafted_blueprint_count += other.drafted_blueprint_count;
        self.email_count += other.email_count;
        self.filed_bug_count += other.filed_bug_count;
        self.loc += other.loc;
        self.patch_set_count += other.patch_set_count;
        self.resolved_bug_count += other.resolved_bug_count;

        for (bucket, count) in &other.marks {
            *self.marks.entry(bucket.clone()).or_insert(0) += count;
        }
    }

    /// Value of a review mark bucket, zero when absent.
    #[must_use]
    pub fn mark(&self, bucket: &str) -> u64 {
        self.marks.get(bucket).copied().unwrap_or(0)
    }
}

/// Errors from the statistics service gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The service has no data for the requested (user, release) pair.
    #[error("no statistics for user '{user}' in release '{release}' (HTTP {status})")]
    NotFound { user: String, release: String, status: u16 },

    /// The request could not be sent or the response could not be read.
    #[error("statistics service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with something the client cannot interpret.
    #[error("unexpected response from the statistics service: {0}")]
    Malformed(String),
}

/// Read operations the table engine needs from the statistics service.
#[expect(async_fn_in_trait, reason = "gateway futures are awaited in place, never spawned")]
pub trait StatsGateway {
    /// The subset of `candidates` registered with the service.
    ///
    /// Individually unknown ids are omitted from the result, never an error.
    async fn registered_users(&self, candidates: &[String]) -> Result<HashSet<String>, GatewayError>;

    /// The contribution record for one (user, release) pair.
    ///
    /// Fails with [`GatewayError::NotFound`] when the service has no data for the pair.
    async fn contribution(&self, user_id: &str, release: &str) -> Result<Contribution, GatewayError>;
}
