//! Newtype domain identifiers.
//!
//! A project name doubles as a filesystem directory name and a URL path
//! segment, so it gets its own type rather than travelling as a bare
//! `String` next to titles and URLs.

use serde::{Deserialize, Serialize};

use crate::GalleryError;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() rejecting empty input, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, rejecting the empty string.
            pub fn new(value: impl Into<String>) -> Result<Self, GalleryError> {
                let v = value.into();
                if v.is_empty() {
                    Err(GalleryError::InvalidProjectName)
                } else {
                    Ok(Self(v))
                }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Identifies a paper project.
    ///
    /// Matches the repository name the project is published under, e.g.
    /// `"spiking-attention"`.
    ProjectName
}
