//! HTTP config source.

use async_trait::async_trait;
use gallery::{ConfigSource, GalleryError, Links, ProjectName, Result};
use tracing::debug;

/// GETs `{raw_base}/{name}/main/myst.yml`.
///
/// Holds one [`reqwest::Client`] so concurrent loads share its connection
/// pool. No timeout is set beyond the client's defaults.
#[derive(Debug, Clone)]
pub struct RemoteConfigSource {
    client: reqwest::Client,
    links: Links,
}

impl RemoteConfigSource {
    /// Creates a source with a default [`reqwest::Client`].
    pub fn new(links: Links) -> Self {
        Self::with_client(reqwest::Client::new(), links)
    }

    /// Creates a source sharing an existing client (proxy, TLS and pool
    /// settings come from `client`).
    pub fn with_client(client: reqwest::Client, links: Links) -> Self {
        Self { client, links }
    }

    #[cfg(test)]
    pub(crate) fn links(&self) -> &Links {
        &self.links
    }
}

#[async_trait]
impl ConfigSource for RemoteConfigSource {
    async fn load(&self, name: &ProjectName) -> Result<Vec<u8>> {
        let url = self.links.config_url(name);
        debug!(%url, "Fetching project config");

        let transport_err = |e: reqwest::Error, url: &str| GalleryError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_err(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Fetch {
                url,
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_err(e, &url))?;
        Ok(body.to_vec())
    }
}
