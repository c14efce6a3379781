//! Command dispatch logic for stackstats

use super::{GroupArgs, InitArgs, ReportArgs, UserArgs, init_config, process_group, process_report, process_user};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "stackstats", version, author, long_about = None)]
#[command(about = "Query contribution statistics for people and releases and render metric tables")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: StatsSubcommand,
}

#[derive(Subcommand, Debug)]
enum StatsSubcommand {
    /// Aggregate metrics per release across a group of people
    Group(Box<GroupArgs>),
    /// Show per-person metrics summed over the requested releases
    User(Box<UserArgs>),
    /// Render the tables defined in a configuration file
    Report(Box<ReportArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        StatsSubcommand::Group(group_args) => process_group(host, group_args).await,
        StatsSubcommand::User(user_args) => process_user(host, user_args).await,
        StatsSubcommand::Report(report_args) => process_report(host, report_args).await,
        StatsSubcommand::Init(init_args) => init_config(host, init_args),
    }
}
