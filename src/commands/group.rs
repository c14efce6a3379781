use super::Host;
use super::common::{self, CommonArgs};
use crate::Result;
use crate::stats::StatsClient;
use crate::tables::GroupMetricsTable;
use clap::Parser;
use ohno::IntoAppError;

/// Arguments for the group command
#[derive(Parser, Debug)]
pub struct GroupArgs {
    /// Comma-separated user ids to aggregate over
    #[arg(long, short = 'p', value_name = "IDS")]
    pub people: String,

    /// Comma-separated releases; column order follows this list
    #[arg(long, short = 'r', value_name = "RELEASES")]
    pub releases: String,

    /// Comma-separated metric keys
    #[arg(long, short = 'm', value_name = "METRICS")]
    pub metrics: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Render one group-metrics table from the command line arguments.
pub async fn process_group<H: Host>(host: &mut H, args: &GroupArgs) -> Result<()> {
    common::init_logging(args.common.log_level);

    let table = GroupMetricsTable::new(&args.people, &args.releases, &args.metrics).into_app_err("parsing query")?;
    let gateway = StatsClient::new(&args.common.stats_url)?;
    common::render_table(host, table, &gateway, None, &args.common).await
}
