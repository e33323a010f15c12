//! Command-line arguments.
//!
//! The host invokes the plugin with no flags to read its manifest, or with
//! exactly one of `--directive`, `--transform`, `--role`. Every other flag
//! has an environment fallback so the host process can be configured
//! without editing the plugin registration.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use fetch::FetcherSettings;
use gallery::Links;

/// MyST executable plugin rendering a gallery of paper cards
#[derive(Parser, Debug)]
#[command(name = "paper-gallery", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Read project configs from this directory instead of fetching them
    #[arg(long, env = "NEXUS_LOCAL_PATH", value_name = "DIR")]
    pub local_path: Option<PathBuf>,

    /// Catalog of paper projects grouped under `# year` headers
    #[arg(long, env = "NEXUS_CATALOG", default_value = "papers.txt")]
    pub catalog: PathBuf,

    /// Base URL for raw project files (`{base}/{name}/main/...`)
    #[arg(long, env = "NEXUS_RAW_BASE", default_value = Links::DEFAULT_RAW_BASE)]
    pub raw_base: String,

    /// Base URL of hosted project pages (`{base}/{name}`)
    #[arg(long, env = "NEXUS_PAGES_BASE", default_value = Links::DEFAULT_PAGES_BASE)]
    pub pages_base: String,

    /// Log output format (logs always go to stderr)
    #[arg(long, env = "NEXUS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
pub struct ModeArgs {
    /// Run the named directive on directive data read from stdin
    #[arg(long, value_name = "NAME")]
    pub directive: Option<String>,

    /// Run the named transform on the document tree read from stdin
    #[arg(long, value_name = "NAME")]
    pub transform: Option<String>,

    /// Run the named role (none are defined)
    #[arg(long, value_name = "NAME")]
    pub role: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// What the host asked the plugin to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Manifest,
    Directive(String),
    Transform(String),
    Role(String),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        let ModeArgs {
            directive,
            transform,
            role,
        } = &self.mode;
        match (directive, transform, role) {
            (Some(name), _, _) => Mode::Directive(name.clone()),
            (_, Some(name), _) => Mode::Transform(name.clone()),
            (_, _, Some(name)) => Mode::Role(name.clone()),
            _ => Mode::Manifest,
        }
    }

    /// Source selection for the transform. An empty `NEXUS_LOCAL_PATH`
    /// counts as unset.
    pub fn fetcher_settings(&self) -> FetcherSettings {
        FetcherSettings {
            local_override: self
                .local_path
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
            links: Links::new(&self.raw_base, &self.pages_base),
        }
    }
}
