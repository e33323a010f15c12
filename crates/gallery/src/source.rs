//! Port through which the gallery obtains project configuration documents.
//!
//! ## Architectural Layer
//!
//! **Domain port.** This crate performs no I/O. Infrastructure crates
//! implement [`ConfigSource`] (local filesystem, HTTP) and the composition
//! root picks one at startup.

use async_trait::async_trait;
use tracing::debug;

use crate::{ProjectConfig, ProjectName, Result};

/// File name of the per-project configuration document.
pub const CONFIG_FILE_NAME: &str = "myst.yml";

/// Retrieves the raw bytes of a project's configuration document.
///
/// Implementations must not cache: every call re-reads or re-fetches. They
/// return bytes untouched; decoding happens once, in [`fetch_config`].
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Returns the configuration document for `name`.
    ///
    /// # Errors
    ///
    /// [`crate::GalleryError::FileAccess`], [`crate::GalleryError::Fetch`] or
    /// [`crate::GalleryError::Transport`] depending on the transport.
    async fn load(&self, name: &ProjectName) -> Result<Vec<u8>>;
}

/// Loads and parses the configuration for `name` from `source`.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected, in
/// both local and remote mode.
pub async fn fetch_config(source: &dyn ConfigSource, name: &ProjectName) -> Result<ProjectConfig> {
    let bytes = source.load(name).await?;
    debug!(project = %name, bytes = bytes.len(), "Loaded project config");
    ProjectConfig::from_yaml(name, &String::from_utf8_lossy(&bytes))
}

// ---------------------------------------------------------------------------
// Link templates
// ---------------------------------------------------------------------------

/// URL prefixes used to build card links and thumbnails.
///
/// Both bases are stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    raw_base: String,
    pages_base: String,
}

impl Links {
    /// Default raw-content base for published projects.
    pub const DEFAULT_RAW_BASE: &'static str = "https://raw.githubusercontent.com/pollomarzo";
    /// Default base of hosted project pages.
    pub const DEFAULT_PAGES_BASE: &'static str = "https://pollomarzo.github.io";

    /// Creates link templates; trailing slashes on either base are dropped.
    pub fn new(raw_base: impl Into<String>, pages_base: impl Into<String>) -> Self {
        Self {
            raw_base: trim_base(raw_base.into()),
            pages_base: trim_base(pages_base.into()),
        }
    }

    /// Raw-content base, without trailing slash.
    pub fn raw_base(&self) -> &str {
        &self.raw_base
    }

    /// `{raw_base}/{name}/main/{path}`
    pub fn raw_file(&self, name: &ProjectName, path: &str) -> String {
        format!("{}/{}/main/{}", self.raw_base, name, path)
    }

    /// Remote location of the project's configuration document.
    pub fn config_url(&self, name: &ProjectName) -> String {
        self.raw_file(name, CONFIG_FILE_NAME)
    }

    /// Card thumbnail: `{raw_base}/{name}/main/thumbnails/thumbnail.png`.
    pub fn thumbnail_url(&self, name: &ProjectName) -> String {
        self.raw_file(name, "thumbnails/thumbnail.png")
    }

    /// Hosted page the card links to.
    pub fn page_url(&self, name: &ProjectName) -> String {
        format!("{}/{}", self.pages_base, name)
    }
}

impl Default for Links {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RAW_BASE, Self::DEFAULT_PAGES_BASE)
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
