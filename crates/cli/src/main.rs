//! Paper gallery executable plugin.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** — flags with environment fallbacks
//!    (`NEXUS_LOCAL_PATH`, `NEXUS_CATALOG`, `NEXUS_RAW_BASE`,
//!    `NEXUS_PAGES_BASE`, `NEXUS_LOG_FORMAT`).
//! 2. **Wire observability** — configure `tracing-subscriber` with a pretty or
//!    JSON layer on stderr. All `tracing` events emitted by every crate in the
//!    workspace flow through this layer.
//! 3. **Construct infrastructure** — pick a local or HTTP config source and
//!    inject it into the transform.
//! 4. **Answer the host** — print the manifest, run the directive, or run the
//!    transform, exchanging JSON over stdin/stdout.
//!
//! Everything runs on a single-threaded runtime; config loads overlap only
//! while waiting on I/O.

mod args;
mod observability;
mod plugin;

use clap::Parser;

use crate::args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    observability::init(cli.log_format)?;

    plugin::run(&cli, std::io::stdin(), std::io::stdout()).await
}
