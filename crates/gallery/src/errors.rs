//! Error types for the paper gallery domain.
//!
//! [`GalleryError`] covers every way resolving a project's configuration can
//! fail. The directive handler never fails; only the transform (and the
//! config sources it drives) produce these.
//!
//! None of these conditions is retried. The first error raised while
//! resolving a batch of cards aborts the batch and surfaces to the host as a
//! build failure.

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Gallery errors
// ---------------------------------------------------------------------------

/// Errors produced while resolving gallery cards.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The local override directory is configured but the project's
    /// configuration file could not be read.
    ///
    /// Produced by: the local filesystem config source.
    #[error("Failed to read config file '{}': {source}", .path.display())]
    FileAccess {
        /// Full path of the file that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The remote server answered with a non-success status.
    ///
    /// Produced by: the HTTP config source.
    #[error("Failed to fetch config from '{url}': {status} {status_text}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// HTTP status code of the response.
        status: u16,
        /// Canonical reason phrase for `status` (empty if unknown).
        status_text: String,
    },

    /// The request never produced a response (connection refused, DNS,
    /// TLS handshake, body read failure).
    ///
    /// Produced by: the HTTP config source.
    #[error("Request to '{url}' failed: {message}")]
    Transport {
        /// URL that was requested.
        url: String,
        /// Transport-level description of the failure.
        message: String,
    },

    /// The configuration document is not valid YAML or lacks a `project`
    /// section.
    #[error("Invalid config for project '{name}': {message}")]
    Parse {
        /// Project whose configuration failed to parse.
        name: String,
        /// Parser or presence-check description.
        message: String,
    },

    /// A project name was empty.
    #[error("Project name must not be empty")]
    InvalidProjectName,
}

/// Convenience alias used throughout the gallery crates.
pub type Result<T, E = GalleryError> = std::result::Result<T, E>;
