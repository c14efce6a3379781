use super::Host;
use super::common::{self, CommonArgs};
use super::config::{Config, DEFAULT_CONFIG_FILE, TableDef, TableKind};
use crate::Result;
use crate::stats::StatsClient;
use crate::tables::{GroupMetricsTable, UserMetricsTable};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, app_err};
use std::io::Write;

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Path to the configuration file
    #[arg(long, short = 'c', value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: Utf8PathBuf,

    /// Render only the named table
    #[arg(long, short = 't', value_name = "NAME")]
    pub table: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Render the tables defined in the configuration file.
pub async fn process_report<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    common::init_logging(args.common.log_level);

    let config = Config::load(&args.config)?;

    let selected: Vec<&TableDef> = match &args.table {
        Some(name) => {
            let def = config
                .tables
                .iter()
                .find(|table| &table.name == name)
                .ok_or_else(|| app_err!("no table named '{name}' in '{}'", args.config))?;
            vec![def]
        }
        None => config.tables.iter().collect(),
    };

    if selected.len() > 1 && (args.common.csv.is_some() || args.common.html.is_some()) {
        return Err(app_err!("--csv and --html render a single table; select one with --table"));
    }

    let gateway = StatsClient::new(&args.common.stats_url)?;

    for (index, def) in selected.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(host.output());
        }

        let releases = config.releases_for(def).expect("validated at load time");
        match def.kind {
            TableKind::GroupMetrics => {
                let table = GroupMetricsTable::new(&def.people, releases, &def.metrics)
                    .into_app_err_with(|| format!("parsing query for table '{}'", def.name))?;
                common::render_table(host, table, &gateway, Some(def.name.as_str()), &args.common).await?;
            }
            TableKind::UserMetrics => {
                let table = UserMetricsTable::new(&def.people, releases, &def.metrics)
                    .into_app_err_with(|| format!("parsing query for table '{}'", def.name))?;
                common::render_table(host, table, &gateway, Some(def.name.as_str()), &args.common).await?;
            }
        }
    }

    Ok(())
}
