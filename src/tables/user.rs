use super::{Matrix, MetricsTable, Query, TableError, fetch_contribution, format_cell, resolve_registered};
use crate::stats::{Contribution, StatsGateway};
use crate::tables::ConfigurationError;

/// People as rows, metrics as columns, values summed over the requested releases.
///
/// Row order follows the query's people order. People the service does not know keep
/// their row but render as blank cells. There is no `sum` row; column totals are only
/// meaningful in the group-by-release orientation.
#[derive(Debug)]
pub struct UserMetricsTable {
    query: Query,
    matrix: Option<Matrix>,
}

impl UserMetricsTable {
    /// Validate the raw query strings. Fails without contacting the service.
    pub fn new(people: &str, releases: &str, metrics: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            query: Query::parse(people, releases, metrics)?,
            matrix: None,
        })
    }
}

impl MetricsTable for UserMetricsTable {
    fn header_info(&self) -> &'static str {
        "user/metric"
    }

    async fn generate<G: StatsGateway>(&mut self, gateway: &G) -> Result<(), TableError> {
        let registered = resolve_registered(gateway, self.query.people()).await?;

        let mut rows: Matrix = Vec::with_capacity(self.query.people().len() + 1);

        let mut header = Vec::with_capacity(self.query.metrics().len() + 1);
        header.push(self.header_info().to_string());
        header.extend(self.query.metrics().iter().map(|metric| metric.pretty_name().to_string()));
        rows.push(header);

        for person in self.query.people() {
            let mut row = Vec::with_capacity(self.query.metrics().len() + 1);
            row.push(person.clone());

            if registered.contains(person) {
                let mut totals = Contribution::default();
                for release in self.query.releases() {
                    if let Some(record) = fetch_contribution(gateway, person, release).await {
                        totals.absorb(&record);
                    }
                }
                row.extend(self.query.metrics().iter().map(|metric| format_cell(*metric, &totals)));
            } else {
                row.extend(self.query.metrics().iter().map(|_| String::new()));
            }

            rows.push(row);
        }

        self.matrix = Some(rows);
        Ok(())
    }

    fn matrix(&self) -> &[Vec<String>] {
        self.matrix.as_ref().expect("generate() must be called before matrix()")
    }
}
