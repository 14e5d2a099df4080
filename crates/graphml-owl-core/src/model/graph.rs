//! Graph side of the conversion: nodes, edges and their presentation data.

use serde::{Deserialize, Serialize};

/// A visual style fragment carried verbatim from a source diagram.
///
/// The content is never parsed or validated; it only travels into an
/// ontology annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBlob(String);

impl StyleBlob {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Node geometry in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// How a node is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeStyle {
    /// Style read from a source diagram, kept opaque.
    Opaque(StyleBlob),
    /// Rectangle drawn with the document's shared stroke and fill palette.
    Rectangle { corner_size: f64 },
}

/// Arrow head drawn at an edge end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowKind {
    Triangle,
}

impl ArrowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrowKind::Triangle => "TRIANGLE",
        }
    }
}

/// How an edge is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EdgeStyle {
    /// Polyline whose source end uses the shared arrow palette entry and whose
    /// target end draws its own arrow.
    Polyline {
        smoothing_length: f64,
        target_arrow: ArrowKind,
    },
}

/// A node in a diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Document-unique identifier, never interpreted.
    pub id: String,
    /// Display text of the node's first label.
    pub label: Option<String>,
    pub style: Option<NodeStyle>,
    pub geometry: Option<Rect>,
    /// Names of the ports edges may attach to.
    pub ports: Vec<String>,
}

impl Node {
    /// Creates a node with only an id and an optional label.
    pub fn new(id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            id: id.into(),
            label,
            style: None,
            geometry: None,
            ports: Vec::new(),
        }
    }

    /// Returns the opaque style fragment, if the node carries one.
    pub fn style_blob(&self) -> Option<&StyleBlob> {
        match &self.style {
            Some(NodeStyle::Opaque(blob)) => Some(blob),
            _ => None,
        }
    }
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Display text of the edge's first label.
    pub label: Option<String>,
    pub source_port: Option<String>,
    pub target_port: Option<String>,
    pub style: Option<EdgeStyle>,
}

impl Edge {
    /// Creates an unstyled edge without port attachments.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label,
            source_port: None,
            target_port: None,
            style: None,
        }
    }
}

/// A labeled directed graph.
///
/// Nodes and edges are kept in document order. Edge order only affects the
/// order of derived output, never which items are produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a node by id. The first node with that id wins.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
