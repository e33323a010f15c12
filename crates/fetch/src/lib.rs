//! Paper gallery config source adapters.
//!
//! Implements the [`gallery::ConfigSource`] port twice:
//!
//! - [`LocalConfigSource`] reads `{root}/{name}/myst.yml` from disk. Meant for
//!   offline development against checked-out project repositories.
//! - [`RemoteConfigSource`] GETs `{raw_base}/{name}/main/myst.yml`.
//!
//! [`ConfigFetcher`] picks one from [`FetcherSettings`] at construction time.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** File access, HTTP transport and status mapping live
//! here. The [`gallery`] crate sees only [`gallery::ConfigSource`].

mod local;
mod remote;

use std::path::PathBuf;

use async_trait::async_trait;
use gallery::{ConfigSource, Links, ProjectName, Result};
use tracing::info;

pub use local::LocalConfigSource;
pub use remote::RemoteConfigSource;

/// Inputs that decide where project configuration comes from.
#[derive(Debug, Clone, Default)]
pub struct FetcherSettings {
    /// When set, configs are read from this directory instead of the network.
    pub local_override: Option<PathBuf>,
    /// URL templates; `raw_base` is used in remote mode.
    pub links: Links,
}

/// A [`ConfigSource`] in either local or remote mode.
#[derive(Debug, Clone)]
pub enum ConfigFetcher {
    /// Reads from the local override directory.
    Local(LocalConfigSource),
    /// Fetches from `raw_base` over HTTP.
    Remote(RemoteConfigSource),
}

impl ConfigFetcher {
    /// Builds the fetcher selected by `settings`.
    pub fn new(settings: &FetcherSettings) -> Self {
        match &settings.local_override {
            Some(root) => {
                info!(root = %root.display(), "Reading project configs from local override");
                Self::Local(LocalConfigSource::new(root.clone()))
            }
            None => {
                info!(base = settings.links.raw_base(), "Fetching project configs over HTTP");
                Self::Remote(RemoteConfigSource::new(settings.links.clone()))
            }
        }
    }

    #[cfg(test)]
    fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

#[async_trait]
impl ConfigSource for ConfigFetcher {
    async fn load(&self, name: &ProjectName) -> Result<Vec<u8>> {
        match self {
            Self::Local(source) => source.load(name).await,
            Self::Remote(source) => source.load(name).await,
        }
    }
}
