//! Filesystem config source.

use std::path::PathBuf;

use async_trait::async_trait;
use gallery::{ConfigSource, GalleryError, ProjectName, Result, CONFIG_FILE_NAME};
use tracing::debug;

/// Reads `{root}/{name}/myst.yml`.
#[derive(Debug, Clone)]
pub struct LocalConfigSource {
    root: PathBuf,
}

impl LocalConfigSource {
    /// Creates a source reading project directories under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path the config for `name` is read from.
    pub fn config_path(&self, name: &ProjectName) -> PathBuf {
        self.root.join(name.as_str()).join(CONFIG_FILE_NAME)
    }
}

#[async_trait]
impl ConfigSource for LocalConfigSource {
    async fn load(&self, name: &ProjectName) -> Result<Vec<u8>> {
        let path = self.config_path(name);
        debug!(path = %path.display(), "Reading project config");
        tokio::fs::read(&path)
            .await
            .map_err(|source| GalleryError::FileAccess { path, source })
    }
}
