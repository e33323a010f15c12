//! Document tree nodes.
//!
//! The host hands the plugin an mdast-like JSON tree. [`Node`] is a closed
//! union over the node kinds this plugin produces, plus [`Node::Other`] which
//! carries any host node verbatim: its `type`, its `children` (parsed, so
//! placeholders nested anywhere are reachable) and every other field as raw
//! JSON. Host content therefore round-trips through the transform untouched.
//!
//! Placeholders are resolved by swapping the whole node at its index path
//! ([`Node::replace_at`]); a node is never retyped field by field.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire `type` of a placeholder node.
pub const PAPER_CARD_REF: &str = "paper-card-ref";

/// Index path from a root node down to a descendant: `[]` is the root,
/// `[2, 0]` is the first child of the root's third child.
pub type NodePath = Vec<usize>;

/// A document tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Responsive grid container.
    Grid(Grid),
    /// Unresolved gallery card.
    PaperCardRef(PaperCardRef),
    /// Resolved gallery card.
    Card(Card),
    /// Card header.
    Header(Parent),
    /// Image with alt text and width hint.
    Image(Image),
    /// Paragraph.
    Paragraph(Parent),
    /// Literal text.
    Text(Text),
    /// Any host node kind the plugin does not model.
    Other(OtherNode),
}

/// Grid container; `columns` lists column counts from the narrowest to the
/// widest breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Column count per breakpoint.
    pub columns: Vec<u8>,
    /// Grid items, usually placeholders or cards.
    pub children: Vec<Node>,
}

/// Placeholder marking where the card for project `name` belongs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperCardRef {
    /// Catalog name of the project.
    pub name: String,
}

/// A card linking to `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Hosted project page.
    pub url: String,
    /// Header, image and optional keyword paragraph.
    pub children: Vec<Node>,
}

/// Node whose only content is its children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parent {
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

/// Image node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image source URL.
    pub url: String,
    /// Alternative text.
    pub alt: String,
    /// CSS width hint, e.g. `"100%"`.
    pub width: String,
}

/// Text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Literal text content.
    pub value: String,
}

/// A host node passed through unchanged.
///
/// `fields` never contains the `type` or `children` keys; those live in
/// `kind` and `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherNode {
    /// The node's `type`.
    pub kind: String,
    /// Parsed children, `None` if the node had no `children` key.
    pub children: Option<Vec<Node>>,
    /// Every other key, verbatim.
    pub fields: Map<String, Value>,
}

impl OtherNode {
    /// Creates an empty node of the given kind with a (possibly empty)
    /// child list.
    pub fn new(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind: kind.into(),
            children: Some(children),
            fields: Map::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl Node {
    /// A text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// A paragraph holding a single text child.
    pub fn paragraph_text(value: impl Into<String>) -> Self {
        Node::Paragraph(Parent {
            children: vec![Node::text(value)],
        })
    }

    /// A placeholder for project `name`.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Node::PaperCardRef(PaperCardRef { name: name.into() })
    }
}

// ---------------------------------------------------------------------------
// Traversal and replacement
// ---------------------------------------------------------------------------

impl Node {
    /// Child list, if this node kind has one.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Grid(Grid { children, .. })
            | Node::Card(Card { children, .. })
            | Node::Header(Parent { children })
            | Node::Paragraph(Parent { children }) => Some(children.as_slice()),
            Node::Other(other) => other.children.as_deref(),
            Node::PaperCardRef(_) | Node::Image(_) | Node::Text(_) => None,
        }
    }

    /// Mutable child list, if this node kind has one.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Grid(Grid { children, .. })
            | Node::Card(Card { children, .. })
            | Node::Header(Parent { children })
            | Node::Paragraph(Parent { children }) => Some(children),
            Node::Other(other) => other.children.as_mut(),
            Node::PaperCardRef(_) | Node::Image(_) | Node::Text(_) => None,
        }
    }

    /// Every placeholder in the tree, in pre-order, with its path.
    pub fn placeholders(&self) -> Vec<(NodePath, &PaperCardRef)> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        collect_placeholders(self, &mut path, &mut found);
        found
    }

    /// Node at `path`, if it exists.
    pub fn get(&self, path: &[usize]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &i| node.children().and_then(|c| c.get(i)))
    }

    /// Replaces the node at `path` with `node`, keeping its position in the
    /// parent's child list. Returns the node that was replaced, or `None`
    /// (and leaves the tree unchanged) if `path` does not exist.
    pub fn replace_at(&mut self, path: &[usize], node: Node) -> Option<Node> {
        let Some((&last, parent_path)) = path.split_last() else {
            return Some(std::mem::replace(self, node));
        };
        let mut parent = self;
        for &i in parent_path {
            parent = parent.children_mut()?.get_mut(i)?;
        }
        let slot = parent.children_mut()?.get_mut(last)?;
        Some(std::mem::replace(slot, node))
    }
}

fn collect_placeholders<'a>(
    node: &'a Node,
    path: &mut NodePath,
    found: &mut Vec<(NodePath, &'a PaperCardRef)>,
) {
    if let Node::PaperCardRef(placeholder) = node {
        found.push((path.clone(), placeholder));
        return;
    }
    if let Some(children) = node.children() {
        for (i, child) in children.iter().enumerate() {
            path.push(i);
            collect_placeholders(child, path, found);
            path.pop();
        }
    }
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum Tagged<'a> {
    Grid(&'a Grid),
    PaperCardRef(&'a PaperCardRef),
    Card(&'a Card),
    Header(&'a Parent),
    Image(&'a Image),
    Paragraph(&'a Parent),
    Text(&'a Text),
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tagged = match self {
            Node::Other(other) => return other.serialize(serializer),
            Node::Grid(n) => Tagged::Grid(n),
            Node::PaperCardRef(n) => Tagged::PaperCardRef(n),
            Node::Card(n) => Tagged::Card(n),
            Node::Header(n) => Tagged::Header(n),
            Node::Image(n) => Tagged::Image(n),
            Node::Paragraph(n) => Tagged::Paragraph(n),
            Node::Text(n) => Tagged::Text(n),
        };
        tagged.serialize(serializer)
    }
}

impl Serialize for OtherNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        if let Some(children) = &self.children {
            map.serialize_entry("children", children)?;
        }
        map.end()
    }
}

// Only placeholders are decoded into a typed variant. Every other kind,
// including ones this plugin emits, comes back as `Other` so host-added
// fields such as `position` survive.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match fields.remove("type") {
            Some(Value::String(kind)) => kind,
            Some(_) => return Err(de::Error::custom("node 'type' must be a string")),
            None => return Err(de::Error::missing_field("type")),
        };

        if kind == PAPER_CARD_REF {
            return serde_json::from_value(Value::Object(fields))
                .map(Node::PaperCardRef)
                .map_err(de::Error::custom);
        }

        let children = fields
            .remove("children")
            .map(serde_json::from_value::<Vec<Node>>)
            .transpose()
            .map_err(de::Error::custom)?;

        Ok(Node::Other(OtherNode {
            kind,
            children,
            fields,
        }))
    }
}
