//! The `paper-cards` transform.
//!
//! Runs at the host's `document` stage, after every directive has emitted its
//! placeholders. All placeholders in the tree are resolved concurrently on
//! the calling task: one config load per placeholder, no cap, no retry.
//!
//! ## Failure behaviour
//!
//! Cards are swapped into the tree as their loads complete. The first failed
//! load ends the batch: its error is returned, loads still in flight are
//! dropped, and placeholders resolved before that point stay resolved.

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::node::{Card, Image, Node, NodePath, Parent};
use crate::{fetch_config, ConfigSource, Links, ProjectConfig, ProjectName, Result};

/// Name under which the transform is registered with the host.
pub const TRANSFORM_NAME: &str = "paper-cards";

/// Separator placed between keywords on a card.
pub const KEYWORD_SEPARATOR: &str = " | ";

/// Replaces every placeholder in `tree` with a rendered card.
///
/// # Errors
///
/// Returns the first error produced by `source` or by config parsing; see
/// the module docs for the state `tree` is left in.
pub async fn resolve_gallery_cards(
    tree: &mut Node,
    source: &dyn ConfigSource,
    links: &Links,
) -> Result<()> {
    let targets: Vec<(NodePath, String)> = tree
        .placeholders()
        .into_iter()
        .map(|(path, placeholder)| (path, placeholder.name.clone()))
        .collect();

    if targets.is_empty() {
        debug!("No paper-card placeholders in document");
        return Ok(());
    }
    info!(count = targets.len(), "Resolving paper cards");

    let mut pending: FuturesUnordered<_> = targets
        .into_iter()
        .map(|(path, name)| async move {
            let card = load_card(source, links, name).await;
            (path, card)
        })
        .collect();

    while let Some((path, card)) = pending.next().await {
        match card {
            Ok(card) => {
                tree.replace_at(&path, card);
            }
            Err(err) => {
                warn!(
                    error = %err,
                    abandoned = pending.len(),
                    "Aborting paper-card resolution"
                );
                return Err(err);
            }
        }
    }

    Ok(())
}

async fn load_card(source: &dyn ConfigSource, links: &Links, name: String) -> Result<Node> {
    let name = ProjectName::new(name)?;
    let config = fetch_config(source, &name).await?;
    info!(project = %name, "Building card");
    Ok(build_card(&name, &config, links))
}

/// Renders the card for `name`: header, thumbnail and, when there are any,
/// a keyword line.
pub fn build_card(name: &ProjectName, config: &ProjectConfig, links: &Links) -> Node {
    let mut children = vec![
        Node::Header(Parent {
            children: vec![Node::text(&config.title)],
        }),
        Node::Image(Image {
            url: links.thumbnail_url(name),
            alt: config.title.clone(),
            width: "100%".to_string(),
        }),
    ];
    if !config.keywords.is_empty() {
        children.push(Node::paragraph_text(config.keywords.join(KEYWORD_SEPARATOR)));
    }

    Node::Card(Card {
        url: links.page_url(name),
        children,
    })
}
