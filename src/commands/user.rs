use super::Host;
use super::common::{self, CommonArgs};
use crate::Result;
use crate::stats::StatsClient;
use crate::tables::UserMetricsTable;
use clap::Parser;
use ohno::IntoAppError;

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Comma-separated user ids, one table row each
    #[arg(long, short = 'p', value_name = "IDS")]
    pub people: String,

    /// Comma-separated releases; metric values are summed across them
    #[arg(long, short = 'r', value_name = "RELEASES")]
    pub releases: String,

    /// Comma-separated metric keys, one table column each
    #[arg(long, short = 'm', value_name = "METRICS")]
    pub metrics: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Render one user-metrics table from the command line arguments.
pub async fn process_user<H: Host>(host: &mut H, args: &UserArgs) -> Result<()> {
    common::init_logging(args.common.log_level);

    let table = UserMetricsTable::new(&args.people, &args.releases, &args.metrics).into_app_err("parsing query")?;
    let gateway = StatsClient::new(&args.common.stats_url)?;
    common::render_table(host, table, &gateway, None, &args.common).await
}
