//! Host protocol for the executable plugin.
//!
//! The host talks to the plugin over stdin/stdout, one invocation per
//! request:
//!
//! | invocation | stdin | stdout |
//! |------------|-------|--------|
//! | no flags | — | [`PluginManifest`] |
//! | `--directive paper-cards` | directive data (`{"options": {...}}`) | array of nodes |
//! | `--transform paper-cards` | document tree | resolved document tree |
//!
//! stdout carries nothing but the JSON reply.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context};
use fetch::ConfigFetcher;
use gallery::{
    render_gallery_directive, resolve_gallery_cards, ConfigSource, DirectiveOptions, Links, Node,
    DIRECTIVE_NAME, TRANSFORM_NAME,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::args::{Cli, Mode};

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// Describes what the plugin provides; printed when run without flags.
#[derive(Debug, Serialize)]
pub struct PluginManifest {
    pub name: &'static str,
    pub directives: Vec<DirectiveSpec>,
    pub transforms: Vec<TransformSpec>,
}

#[derive(Debug, Serialize)]
pub struct DirectiveSpec {
    pub name: &'static str,
    pub doc: &'static str,
    pub options: DirectiveOptionSpecs,
}

#[derive(Debug, Serialize)]
pub struct DirectiveOptionSpecs {
    pub subset: OptionSpec,
}

#[derive(Debug, Serialize)]
pub struct OptionSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub doc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TransformSpec {
    pub name: &'static str,
    pub doc: &'static str,
    pub stage: &'static str,
}

impl PluginManifest {
    pub fn paper_gallery() -> Self {
        Self {
            name: "Paper Gallery",
            directives: vec![DirectiveSpec {
                name: DIRECTIVE_NAME,
                doc: "Generate a gallery of paper cards",
                options: DirectiveOptionSpecs {
                    subset: OptionSpec {
                        kind: "string",
                        doc: "Filter by year",
                    },
                },
            }],
            transforms: vec![TransformSpec {
                name: TRANSFORM_NAME,
                doc: "Resolve paper-card placeholders into cards",
                stage: "document",
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Directive payload sent by the host. Only `options` is read.
#[derive(Debug, Default, Deserialize)]
struct DirectiveData {
    #[serde(default)]
    options: DirectiveOptions,
}

/// Handles one host invocation, reading the request from `input` and
/// writing the JSON reply to `output`.
pub async fn run(cli: &Cli, input: impl Read, mut output: impl Write) -> anyhow::Result<()> {
    match cli.mode() {
        Mode::Manifest => write_json(&mut output, &PluginManifest::paper_gallery()),
        Mode::Directive(name) => {
            let nodes = run_directive(&name, input, &cli.catalog)?;
            write_json(&mut output, &nodes)
        }
        Mode::Transform(name) => {
            let settings = cli.fetcher_settings();
            let fetcher = ConfigFetcher::new(&settings);
            let tree = run_transform(&name, input, &fetcher, &settings.links).await?;
            write_json(&mut output, &tree)
        }
        Mode::Role(name) => bail!("Unknown role '{name}': this plugin defines no roles"),
    }
}

fn run_directive(name: &str, input: impl Read, catalog: &Path) -> anyhow::Result<Vec<Node>> {
    if name != DIRECTIVE_NAME {
        bail!("Unknown directive '{name}', expected '{DIRECTIVE_NAME}'");
    }
    let data: DirectiveData =
        serde_json::from_reader(input).context("Failed to parse directive data from stdin")?;
    let source = std::fs::read_to_string(catalog)
        .with_context(|| format!("Failed to read catalog '{}'", catalog.display()))?;

    Ok(render_gallery_directive(&source, &data.options))
}

async fn run_transform(
    name: &str,
    input: impl Read,
    source: &dyn ConfigSource,
    links: &Links,
) -> anyhow::Result<Node> {
    if name != TRANSFORM_NAME {
        bail!("Unknown transform '{name}', expected '{TRANSFORM_NAME}'");
    }
    let mut tree: Node =
        serde_json::from_reader(input).context("Failed to parse document tree from stdin")?;

    resolve_gallery_cards(&mut tree, source, links)
        .await
        .context("Failed to resolve paper cards")?;
    info!("paper-cards transform complete");

    Ok(tree)
}

fn write_json(output: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *output, value).context("Failed to write reply to stdout")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::{json, Value};

    use super::*;

    async fn invoke(args: &[&str], input: &str) -> anyhow::Result<Value> {
        let mut argv = vec!["paper-gallery"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;
        let mut output = Vec::new();
        run(&cli, input.as_bytes(), &mut output).await?;
        Ok(serde_json::from_slice(&output)?)
    }

    #[tokio::test]
    async fn test_manifest_advertises_directive_and_transform() {
        let manifest = invoke(&[], "").await.unwrap();
        assert_eq!(
            manifest,
            json!({
                "name": "Paper Gallery",
                "directives": [{
                    "name": "paper-cards",
                    "doc": "Generate a gallery of paper cards",
                    "options": { "subset": { "type": "string", "doc": "Filter by year" } }
                }],
                "transforms": [{
                    "name": "paper-cards",
                    "doc": "Resolve paper-card placeholders into cards",
                    "stage": "document"
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_directive_reads_catalog_and_subset() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("papers.txt");
        std::fs::write(&catalog, "# 2023\nfoo\nbar\n# 2024\nbaz\n").unwrap();

        let nodes = invoke(
            &["--directive", "paper-cards", "--catalog", catalog.to_str().unwrap()],
            r#"{ "name": "paper-cards", "options": { "subset": "2024" }, "body": "" }"#,
        )
        .await
        .unwrap();

        assert_eq!(
            nodes,
            json!([{
                "type": "grid",
                "columns": [1, 1, 2, 3],
                "children": [{ "type": "paper-card-ref", "name": "baz" }]
            }])
        );
    }

    #[tokio::test]
    async fn test_directive_without_options_renders_all() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("papers.txt");
        std::fs::write(&catalog, "a\nb\n").unwrap();

        let nodes = invoke(
            &["--directive", "paper-cards", "--catalog", catalog.to_str().unwrap()],
            r#"{ "name": "paper-cards" }"#,
        )
        .await
        .unwrap();

        assert_eq!(nodes[0]["children"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("nope.txt");

        let err = invoke(
            &["--directive", "paper-cards", "--catalog", catalog.to_str().unwrap()],
            "{}",
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[tokio::test]
    async fn test_unknown_directive_is_rejected() {
        let err = invoke(&["--directive", "other-cards"], "{}").await.unwrap_err();
        assert!(err.to_string().contains("Unknown directive 'other-cards'"));
    }

    #[tokio::test]
    async fn test_role_is_rejected() {
        let err = invoke(&["--role", "cite"], "").await.unwrap_err();
        assert!(err.to_string().contains("no roles"));
    }

    #[tokio::test]
    async fn test_transform_passes_through_tree_without_placeholders() {
        let tree = json!({
            "type": "root",
            "children": [{ "type": "paragraph", "children": [{ "type": "text", "value": "hi" }] }]
        });

        let out = invoke(&["--transform", "paper-cards"], &tree.to_string())
            .await
            .unwrap();

        assert_eq!(out, tree);
    }

    #[tokio::test]
    async fn test_transform_resolves_from_local_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("foo")).unwrap();
        std::fs::write(
            dir.path().join("foo/myst.yml"),
            "project:\n  title: Foo\n  keywords: [a, b]\n",
        )
        .unwrap();
        let tree = json!({
            "type": "root",
            "children": [{
                "type": "grid",
                "columns": [1, 1, 2, 3],
                "children": [{ "type": "paper-card-ref", "name": "foo", "children": [] }]
            }]
        });

        let out = invoke(
            &[
                "--transform",
                "paper-cards",
                "--local-path",
                dir.path().to_str().unwrap(),
                "--raw-base",
                "http://raw.test",
                "--pages-base",
                "http://pages.test",
            ],
            &tree.to_string(),
        )
        .await
        .unwrap();

        assert_eq!(
            out["children"][0]["children"][0],
            json!({
                "type": "card",
                "url": "http://pages.test/foo",
                "children": [
                    { "type": "header", "children": [{ "type": "text", "value": "Foo" }] },
                    {
                        "type": "image",
                        "url": "http://raw.test/foo/main/thumbnails/thumbnail.png",
                        "alt": "Foo",
                        "width": "100%"
                    },
                    { "type": "paragraph", "children": [{ "type": "text", "value": "a | b" }] }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_transform_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let tree = json!({
            "type": "root",
            "children": [{ "type": "paper-card-ref", "name": "missing" }]
        });
        let cli = Cli::try_parse_from([
            "paper-gallery",
            "--transform",
            "paper-cards",
            "--local-path",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let mut output = Vec::new();

        let err = run(&cli, tree.to_string().as_bytes(), &mut output)
            .await
            .unwrap_err();

        assert!(output.is_empty());
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
