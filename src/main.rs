//! A tool to query contribution statistics for people and releases and render metric tables.
//!
//! # Overview
//!
//! `stackstats` asks a contribution-statistics service how much a set of people contributed
//! during a set of releases, and renders the answer as a two-dimensional table along
//! selectable metrics (commits, reviews, lines of code, bugs, blueprints, ...).
//!
//! Two table layouts are available:
//!
//! - **group**: one row per metric, one column per release, values aggregated across
//!   all requested people. Ends with a `sum` row totaling the additive metrics.
//! - **user**: one row per person, one column per metric, values summed over the
//!   requested releases. People unknown to the service get blank cells.
//!
//! # Basic Usage
//!
//! Aggregate a team's metrics per release:
//!
//! ```bash
//! stackstats group -p user1,user2 -r icehouse,juno -m commit_count,reviews
//! ```
//!
//! Show per-person totals:
//!
//! ```bash
//! stackstats user -p user1,user2 -r juno -m commit_count,loc
//! ```
//!
//! Render the tables defined in a configuration file:
//!
//! ```bash
//! stackstats init                    # writes stackstats.toml
//! stackstats report                  # renders every configured table
//! stackstats report --table my-team  # renders one of them
//! ```
//!
//! # Output Formats
//!
//! Tables render to the terminal by default. Use `--csv PATH` or `--html PATH` to write
//! a file instead:
//!
//! ```bash
//! stackstats group -p user1 -r juno -m loc --csv juno.csv
//! ```
//!
//! # Service Endpoint
//!
//! The statistics service defaults to the public Stackalytics instance; point the tool
//! elsewhere with `--stats-url` or the `STACKALYTICS_URL` environment variable.

use stackstats::{Host, Result, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that talks to the real process environment.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run(&mut RealHost, std::env::args()).await
}
