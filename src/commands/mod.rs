//! Command-line interface and orchestration for stackstats
//!
//! This module implements the CLI commands and coordinates the query, gateway, table,
//! and report layers into end-to-end table generation.
//!
//! # Implementation Model
//!
//! The module is organized around four commands:
//!
//! - **group**: build one group-metrics table (metrics × releases) from command-line
//!   flags, fetch statistics, and render it
//! - **user**: the same for a user-metrics table (people × metrics)
//! - **report**: render the tables defined in a TOML configuration file, all of them
//!   or one selected by name
//! - **init**: generate a default configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. Each table-producing command follows the same pattern:
//!
//! 1. Parse and validate the query (construction fails fast on bad input)
//! 2. Fetch and aggregate statistics through the gateway
//! 3. Emit the finished matrix to the console or to CSV/HTML files
//!
//! The `common` module provides shared functionality like logging setup, color mode
//! handling, and the render/emit logic that coordinates the output formats.

mod common;
mod config;
mod group;
mod host;
mod init;
mod report;
mod run;
mod user;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use config::{Config, DEFAULT_CONFIG_FILE, TableDef, TableKind};
pub use group::{GroupArgs, process_group};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use report::{ReportArgs, process_report};
pub use run::run;
pub use user::{UserArgs, process_user};

#[cfg(test)]
pub(crate) use host::TestHost;
