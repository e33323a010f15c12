//! The `paper-cards` directive.
//!
//! Runs while the host parses the document. It only reads the catalog, so it
//! is synchronous and cannot fail: each surviving entry becomes a
//! [`PaperCardRef`](crate::PaperCardRef) placeholder for the transform to
//! resolve later.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::node::{Grid, Node};
use crate::Catalog;

/// Name under which the directive is registered with the host.
pub const DIRECTIVE_NAME: &str = "paper-cards";

/// Message rendered when no catalog entry survives the filter.
pub const EMPTY_GALLERY_MESSAGE: &str = "No papers found.";

/// Column counts from the narrowest to the widest breakpoint.
pub const GRID_COLUMNS: [u8; 4] = [1, 1, 2, 3];

/// Options accepted by the directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveOptions {
    /// Only include entries listed under this exact year header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
}

/// Renders the gallery placeholder nodes for `catalog_source`.
///
/// Returns a single grid of placeholders, or a single "No papers found."
/// paragraph when the filtered catalog is empty.
pub fn render_gallery_directive(catalog_source: &str, options: &DirectiveOptions) -> Vec<Node> {
    let catalog = Catalog::parse(catalog_source);
    let subset = options.subset.as_deref();
    let entries = catalog.filter(subset);
    info!(
        subset = subset.unwrap_or(""),
        count = entries.len(),
        "paper-cards: rendering placeholders"
    );

    if entries.is_empty() {
        return vec![Node::paragraph_text(EMPTY_GALLERY_MESSAGE)];
    }

    vec![Node::Grid(Grid {
        columns: GRID_COLUMNS.to_vec(),
        children: entries
            .into_iter()
            .map(|e| Node::placeholder(e.name.clone()))
            .collect(),
    })]
}
