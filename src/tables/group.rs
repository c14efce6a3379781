use super::{Matrix, MetricsTable, Query, TableError, column_sum, fetch_contribution, format_cell, resolve_registered};
use crate::stats::{Contribution, StatsGateway};
use crate::tables::ConfigurationError;

/// Metrics as rows, releases as columns, values aggregated over all registered people.
///
/// Column order follows the query's release order verbatim. The last row is a `sum`
/// row totaling the additive metrics per release.
#[derive(Debug)]
pub struct GroupMetricsTable {
    query: Query,
    matrix: Option<Matrix>,
}

impl GroupMetricsTable {
    /// Validate the raw query strings. Fails without contacting the service.
    pub fn new(people: &str, releases: &str, metrics: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            query: Query::parse(people, releases, metrics)?,
            matrix: None,
        })
    }
}

impl MetricsTable for GroupMetricsTable {
    fn header_info(&self) -> &'static str {
        "metric/release"
    }

    async fn generate<G: StatsGateway>(&mut self, gateway: &G) -> Result<(), TableError> {
        let registered = resolve_registered(gateway, self.query.people()).await?;

        // One aggregated record per release column, releases in query order.
        let mut columns = Vec::with_capacity(self.query.releases().len());
        for release in self.query.releases() {
            let mut totals = Contribution::default();
            for person in self.query.people().iter().filter(|person| registered.contains(person.as_str())) {
                if let Some(record) = fetch_contribution(gateway, person, release).await {
                    totals.absorb(&record);
                }
            }
            columns.push(totals);
        }

        let mut rows: Matrix = Vec::with_capacity(self.query.metrics().len() + 2);

        let mut header = Vec::with_capacity(columns.len() + 1);
        header.push(self.header_info().to_string());
        header.extend(self.query.releases().iter().cloned());
        rows.push(header);

        for metric in self.query.metrics() {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push(metric.pretty_name().to_string());
            row.extend(columns.iter().map(|totals| format_cell(*metric, totals)));
            rows.push(row);
        }

        let mut sum_row = Vec::with_capacity(columns.len() + 1);
        sum_row.push("sum".to_string());
        sum_row.extend(columns.iter().map(|totals| column_sum(self.query.metrics(), totals).to_string()));
        rows.push(sum_row);

        self.matrix = Some(rows);
        Ok(())
    }

    fn matrix(&self) -> &[Vec<String>] {
        self.matrix.as_ref().expect("generate() must be called before matrix()")
    }
}
