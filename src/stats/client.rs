//! HTTP client for the statistics service API.
//!
//! Minimal client for the two endpoints the table engine consumes: the user registry
//! (`/api/1.0/users`) and per-(user, release) contribution records
//! (`/api/1.0/contribution`).

use super::{Contribution, GatewayError, StatsGateway};
use serde::Deserialize;
use std::collections::HashSet;
use url::Url;

/// Default base URL of the public statistics service.
pub const DEFAULT_BASE_URL: &str = "https://www.stackalytics.io";

const USERS_PATH: &str = "api/1.0/users";
const CONTRIBUTION_PATH: &str = "api/1.0/contribution";

const LOG_TARGET: &str = "stats";

/// One entry of the user registry.
#[derive(Debug, Deserialize)]
struct RegistryEntry {
    id: String,
}

/// Response envelope of the users endpoint.
#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(default)]
    data: Vec<RegistryEntry>,
}

/// Response envelope of the contribution endpoint.
#[derive(Debug, Deserialize)]
struct ContributionResponse {
    contribution: Contribution,
}

/// Statistics service API client.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl StatsClient {
    /// Create a client against `base_url` (e.g. [`DEFAULT_BASE_URL`]).
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let client = reqwest::Client::builder().user_agent("stackstats").build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::Malformed(format!("invalid endpoint URL for '{path}': {e}")))
    }
}

impl StatsGateway for StatsClient {
    async fn registered_users(&self, candidates: &[String]) -> Result<HashSet<String>, GatewayError> {
        let url = self.endpoint(USERS_PATH)?;
        log::debug!(target: LOG_TARGET, "fetching the user registry from {url}");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let registry: RegistryResponse = response.json().await?;

        let known: HashSet<&str> = registry.data.iter().map(|entry| entry.id.as_str()).collect();
        Ok(candidates.iter().filter(|id| known.contains(id.as_str())).cloned().collect())
    }

    async fn contribution(&self, user_id: &str, release: &str) -> Result<Contribution, GatewayError> {
        let mut url = self.endpoint(CONTRIBUTION_PATH)?;
        url.query_pairs_mut().append_pair("user_id", user_id).append_pair("release", release);
        log::debug!(target: LOG_TARGET, "fetching contribution stats for '{user_id}' in '{release}'");

        let response = self.client.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound {
                user: user_id.to_string(),
                release: release.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: ContributionResponse = response.error_for_status()?.json().await?;
        Ok(body.contribution)
    }
}
