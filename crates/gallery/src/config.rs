//! Project configuration extracted from a project's `myst.yml`.
//!
//! Only the `project` section is read, and only two fields of it:
//!
//! ```yaml
//! project:
//!   title: Spiking Attention
//!   keywords: [neuroscience, transformers]
//! ```
//!
//! Everything else in the document is ignored.

use serde::Deserialize;

use crate::{GalleryError, ProjectName, Result};

/// Display data for one gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Card title. Falls back to the project name when missing or empty.
    pub title: String,
    /// Keywords shown under the thumbnail, in document order.
    pub keywords: Vec<String>,
}

impl ProjectConfig {
    /// Parses a YAML configuration document for `name`.
    ///
    /// # Errors
    ///
    /// [`GalleryError::Parse`] if `text` is not valid YAML, has no `project`
    /// mapping, or lists a keyword that is not a scalar.
    pub fn from_yaml(name: &ProjectName, text: &str) -> Result<Self> {
        let parse_err = |message: String| GalleryError::Parse {
            name: name.to_string(),
            message,
        };

        let document: ConfigDocument =
            serde_yaml::from_str(text).map_err(|e| parse_err(e.to_string()))?;
        let project = document
            .project
            .ok_or_else(|| parse_err("missing 'project' section".to_string()))?;

        let title = match project.title {
            Some(t) if !t.is_empty() => t,
            _ => name.to_string(),
        };

        let keywords = project
            .keywords
            .unwrap_or_default()
            .into_iter()
            .map(|k| scalar_to_string(k).ok_or_else(|| parse_err("keywords must be scalars".into())))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { title, keywords })
    }
}

// ---------------------------------------------------------------------------
// Wire shape of myst.yml
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ConfigDocument {
    project: Option<ProjectSection>,
}

#[derive(Debug, Deserialize)]
struct ProjectSection {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    keywords: Option<Vec<serde_yaml::Value>>,
}

fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
