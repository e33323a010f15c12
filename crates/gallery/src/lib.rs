//! Core domain of the paper gallery plugin.
//!
//! Parses the paper catalog, renders the `paper-cards` directive into
//! placeholder nodes, and resolves those placeholders into cards. Loading a
//! project's `myst.yml` goes through the [`ConfigSource`] port; the `fetch`
//! crate supplies the filesystem and HTTP implementations.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`catalog`] | Catalog file parsing and year filtering |
//! | [`config`] | `ProjectConfig` extraction from `myst.yml` |
//! | [`node`] | Document tree node union and replace-in-parent |
//! | [`directive`] | `paper-cards` directive handler |
//! | [`transform`] | `paper-cards` transform (concurrent card resolution) |
//! | [`source`] | `ConfigSource` port and URL templates |
//! | [`identifiers`] | Newtype domain identifiers |
//! | [`errors`] | Error type shared by every crate in the workspace |

pub mod catalog;
pub mod config;
pub mod directive;
pub mod errors;
pub mod identifiers;
pub mod node;
pub mod source;
pub mod transform;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use catalog::{parse_catalog, Catalog, CatalogEntry};
pub use config::ProjectConfig;
pub use directive::{render_gallery_directive, DirectiveOptions, DIRECTIVE_NAME};
pub use errors::{GalleryError, Result};
pub use identifiers::ProjectName;
pub use node::{Card, Grid, Image, Node, NodePath, OtherNode, PaperCardRef, Parent, Text};
pub use source::{fetch_config, ConfigSource, Links, CONFIG_FILE_NAME};
pub use transform::{build_card, resolve_gallery_cards, TRANSFORM_NAME};
