//! Namespace URIs and fixed names of both document formats.

/// RDF syntax namespace.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDF schema namespace.
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace.
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
/// XML schema datatypes namespace.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
/// XML schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Prefixes declared on an ontology document root, in declaration order.
pub const ONTOLOGY_PREFIXES: &[(&str, &str)] = &[
    ("rdf", RDF_NS),
    ("rdfs", RDFS_NS),
    ("owl", OWL_NS),
    ("xsd", XSD_NS),
];

/// GraphML core namespace.
pub const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
/// yFiles common namespace (labels, geometry, shared data).
pub const YFILES_NS: &str = "http://www.yworks.com/xml/yfiles-common/2.0";
/// yFiles common 4.0 namespace.
pub const YFILES_4_NS: &str = "http://www.yworks.com/xml/yfiles-common/4.0";
/// yFiles for HTML XAML namespace (styles, palette entries).
pub const YJS_NS: &str = "http://www.yworks.com/xml/yfiles-for-html/3.0/xaml";
/// yFiles markup namespace (lists).
pub const MARKUP_NS: &str = "http://www.yworks.com/xml/yfiles-common/markup/3.0";

/// Prefixes declared on a GraphML document root, after the default namespace.
pub const GRAPHML_PREFIXES: &[(&str, &str)] = &[
    ("xsi", XSI_NS),
    ("y", YFILES_NS),
    ("yx", YFILES_4_NS),
    ("yjs", YJS_NS),
    ("x", MARKUP_NS),
];

/// `xsi:schemaLocation` of a GraphML document.
pub const GRAPHML_SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://www.yworks.com/xml/schema/graphml.html/2.0/ygraphml.xsd";

/// Comment line written after the declaration of a GraphML document.
pub const GRAPHML_BANNER: &str = "Created by yFiles for HTML 3.0.0.4";

/// A `key` declaration of a GraphML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDecl {
    pub id: &'static str,
    pub target: &'static str,
    pub attr_type: &'static str,
    pub attr_name: &'static str,
    pub attr_uri: &'static str,
}

const fn key(
    id: &'static str,
    target: &'static str,
    attr_type: &'static str,
    attr_name: &'static str,
    attr_uri: &'static str,
) -> KeyDecl {
    KeyDecl {
        id,
        target,
        attr_type,
        attr_name,
        attr_uri,
    }
}

/// Node label data key.
pub const KEY_NODE_LABELS: &str = "d1";
/// Node geometry data key.
pub const KEY_NODE_GEOMETRY: &str = "d2";
/// Node style data key.
pub const KEY_NODE_STYLE: &str = "d4";
/// Edge label data key.
pub const KEY_EDGE_LABELS: &str = "d6";
/// Edge style data key.
pub const KEY_EDGE_STYLE: &str = "d8";
/// Document-level shared data key.
pub const KEY_SHARED_DATA: &str = "d14";

/// Every key a generated GraphML document declares: fourteen node, edge and
/// port slots plus the document-level shared data slot.
pub const GRAPHML_KEYS: &[KeyDecl] = &[
    key("d0", "node", "boolean", "Expanded", "http://www.yworks.com/xml/yfiles-common/2.0/folding/Expanded"),
    key(KEY_NODE_LABELS, "node", "string", "NodeLabels", "http://www.yworks.com/xml/yfiles-common/2.0/NodeLabels"),
    key(KEY_NODE_GEOMETRY, "node", "string", "NodeGeometry", "http://www.yworks.com/xml/yfiles-common/2.0/NodeGeometry"),
    key("d3", "all", "string", "UserTags", "http://www.yworks.com/xml/yfiles-common/2.0/UserTags"),
    key(KEY_NODE_STYLE, "node", "string", "NodeStyle", "http://www.yworks.com/xml/yfiles-common/2.0/NodeStyle"),
    key("d5", "node", "string", "NodeViewState", "http://www.yworks.com/xml/yfiles-common/2.0/folding/1.1/NodeViewState"),
    key(KEY_EDGE_LABELS, "edge", "string", "EdgeLabels", "http://www.yworks.com/xml/yfiles-common/2.0/EdgeLabels"),
    key("d7", "edge", "string", "EdgeGeometry", "http://www.yworks.com/xml/yfiles-common/2.0/EdgeGeometry"),
    key(KEY_EDGE_STYLE, "edge", "string", "EdgeStyle", "http://www.yworks.com/xml/yfiles-common/2.0/EdgeStyle"),
    key("d9", "edge", "string", "EdgeViewState", "http://www.w3.org/2001/XMLSchema-instance/folding/1.1/EdgeViewState"),
    key("d10", "port", "string", "PortLabels", "http://www.yworks.com/xml/yfiles-common/2.0/PortLabels"),
    key("d11", "port", "string", "PortLocationParameter", "http://www.yworks.com/xml/yfiles-common/2.0/PortLocationParameter"),
    key("d12", "port", "string", "PortStyle", "http://www.yworks.com/xml/yfiles-common/2.0/PortStyle"),
    key("d13", "port", "string", "PortViewState", "http://www.yworks.com/xml/yfiles-common/2.0/folding/1.1/PortViewState"),
    key(KEY_SHARED_DATA, "graphml", "string", "SharedData", "http://www.yworks.com/xml/yfiles-common/2.0/SharedData"),
];

// Shared palette entries, referenced from styles as `{y:GraphMLReference <key>}`.

/// Palette key of the label font.
pub const PALETTE_FONT: &str = "7";
/// Palette key of the node stroke.
pub const PALETTE_STROKE: &str = "8";
/// Palette key of the node fill.
pub const PALETTE_FILL: &str = "9";
/// Palette key of the edge source arrow.
pub const PALETTE_ARROW: &str = "10";

/// Stroke color of synthesized nodes.
pub const STROKE_COLOR: &str = "#662b00";
/// Fill color of synthesized nodes.
pub const FILL_COLOR: &str = "#ff6c00";
