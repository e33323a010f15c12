//! Tracing subscriber wiring.
//!
//! stdout carries the plugin protocol, so every layer writes to stderr.
//! Verbosity follows `RUST_LOG`, defaulting to `info`. Colour is only used
//! when stderr is a terminal; the host normally captures it through a pipe.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::LogFormat;

/// Installs the global subscriber for `format`.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let ansi = use_colour(format, std::io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_ansi(ansi).with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

/// Escape codes are only written for the pretty format on a terminal.
fn use_colour(format: LogFormat, stderr_is_terminal: bool) -> bool {
    matches!(format, LogFormat::Pretty) && stderr_is_terminal
}
