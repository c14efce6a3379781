//! Shared plumbing for the table-producing commands.

use super::Host;
use crate::Result;
use crate::reports::{generate_console, generate_csv, generate_html};
use crate::stats::{DEFAULT_BASE_URL, StatsGateway};
use crate::tables::MetricsTable;
use camino::Utf8PathBuf;
use chrono::Local;
use clap::Args;
use clap::ValueEnum;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by the table-producing commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Base URL of the contribution-statistics service
    #[arg(long, value_name = "URL", env = "STACKALYTICS_URL", default_value = DEFAULT_BASE_URL)]
    pub stats_url: String,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Write the table to a CSV file instead of the terminal
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Write the table to an HTML file instead of the terminal
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub html: Option<Utf8PathBuf>,
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

/// Generate `table` and emit it to the configured outputs.
pub async fn render_table<H, T, G>(host: &mut H, mut table: T, gateway: &G, title: Option<&str>, args: &CommonArgs) -> Result<()>
where
    H: Host,
    T: MetricsTable,
    G: StatsGateway,
{
    table.generate(gateway).await.into_app_err("generating table")?;
    emit_matrix(host, table.matrix(), title, args)
}

/// Emit an already generated matrix to the configured outputs.
///
/// Writes CSV and/or HTML files when requested; otherwise renders to the console.
pub fn emit_matrix<H: Host>(host: &mut H, matrix: &[Vec<String>], title: Option<&str>, args: &CommonArgs) -> Result<()> {
    let to_file = args.csv.is_some() || args.html.is_some();

    if let Some(filename) = &args.csv {
        let mut output = String::new();
        generate_csv(matrix, &mut output)?;
        fs::write(filename, output).into_app_err_with(|| format!("writing CSV report to '{filename}'"))?;
    }

    if let Some(filename) = &args.html {
        let mut output = String::new();
        generate_html(title, matrix, Local::now(), &mut output)?;
        fs::write(filename, output).into_app_err_with(|| format!("writing HTML report to '{filename}'"))?;
    }

    if !to_file {
        let use_colors = match args.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        };

        let mut output = String::new();
        generate_console(title, matrix, use_colors, &mut output)?;
        let _ = write!(host.output(), "{output}");
    }

    Ok(())
}
