use crate::config::LayoutConfig;
use crate::model::{Edge, EdgeStyle, GraphDocument, Node, NodeStyle, Rect};
use crate::vocab::{
    FILL_COLOR, GRAPHML_KEYS, GRAPHML_NS, GRAPHML_PREFIXES, GRAPHML_SCHEMA_LOCATION,
    KEY_EDGE_LABELS, KEY_EDGE_STYLE, KEY_NODE_GEOMETRY, KEY_NODE_LABELS, KEY_NODE_STYLE,
    KEY_SHARED_DATA, PALETTE_ARROW, PALETTE_FILL, PALETTE_FONT, PALETTE_STROKE, STROKE_COLOR,
};
use crate::xml::Element;

/// Builds the `graphml` root element for a graph.
///
/// The key declarations and the shared palette are the same for every
/// document; only the `graph` element depends on the input.
pub fn write_graph(graph: &GraphDocument, layout: &LayoutConfig) -> Element {
    let mut root = Element::new("graphml").with_attr("xmlns", GRAPHML_NS);
    for (prefix, uri) in GRAPHML_PREFIXES {
        root.set_attr(format!("xmlns:{prefix}"), *uri);
    }
    root.set_attr("xsi:schemaLocation", GRAPHML_SCHEMA_LOCATION);

    for key in GRAPHML_KEYS {
        root.push_child(
            Element::new("key")
                .with_attr("id", key.id)
                .with_attr("for", key.target)
                .with_attr("attr.type", key.attr_type)
                .with_attr("attr.name", key.attr_name)
                .with_attr("y:attr.uri", key.attr_uri),
        );
    }

    root.push_child(data(KEY_SHARED_DATA, shared_palette()));

    let body = root.push_child(
        Element::new("graph")
            .with_attr("id", "G")
            .with_attr("edgedefault", "directed"),
    );
    for node in &graph.nodes {
        body.push_child(write_node(node, layout));
    }
    for edge in &graph.edges {
        body.push_child(write_edge(edge, layout));
    }

    root
}

fn data(key: &str, content: Element) -> Element {
    Element::new("data").with_attr("key", key).with_child(content)
}

fn reference(key: &str) -> String {
    format!("{{y:GraphMLReference {key}}}")
}

fn labels(text: &str, preferred_size: &str) -> Element {
    Element::new("x:List").with_child(
        Element::new("y:Label")
            .with_attr("Text", text)
            .with_attr("PreferredSize", preferred_size),
    )
}

/// Font, stroke, fill and arrow entries referenced by the synthesized styles.
fn shared_palette() -> Element {
    Element::new("y:SharedData")
        .with_child(
            Element::new("yjs:Font")
                .with_attr("y:Key", PALETTE_FONT)
                .with_attr("fontSize", "12")
                .with_attr("lineSpacing", "0.2"),
        )
        .with_child(
            Element::new("yjs:Stroke")
                .with_attr("y:Key", PALETTE_STROKE)
                .with_attr("lineCap", "SQUARE")
                .with_attr("thickness", "1.5")
                .with_child(
                    Element::new("yjs:Stroke.fill")
                        .with_child(Element::new("yjs:CssFill").with_attr("cssString", STROKE_COLOR)),
                ),
        )
        .with_child(
            Element::new("yjs:CssFill")
                .with_attr("y:Key", PALETTE_FILL)
                .with_attr("cssString", FILL_COLOR),
        )
        .with_child(
            Element::new("yjs:Arrow")
                .with_attr("y:Key", PALETTE_ARROW)
                .with_attr("fill", "BLACK")
                .with_attr("type", "NONE"),
        )
}

fn write_node(node: &Node, layout: &LayoutConfig) -> Element {
    let mut element = Element::new("node").with_attr("id", node.id.as_str());

    if let Some(label) = &node.label {
        element.push_child(data(KEY_NODE_LABELS, labels(label, &layout.node_label_size)));
    }
    if let Some(geometry) = &node.geometry {
        element.push_child(data(KEY_NODE_GEOMETRY, rect(geometry)));
    }
    if let Some(style) = node.style.as_ref().and_then(node_style) {
        element.push_child(data(KEY_NODE_STYLE, style));
    }
    for port in &node.ports {
        element.push_child(Element::new("port").with_attr("name", port.as_str()));
    }

    element
}

fn rect(geometry: &Rect) -> Element {
    Element::new("y:RectD")
        .with_attr("X", geometry.x.to_string())
        .with_attr("Y", geometry.y.to_string())
        .with_attr("Width", geometry.width.to_string())
        .with_attr("Height", geometry.height.to_string())
}

fn node_style(style: &NodeStyle) -> Option<Element> {
    match style {
        NodeStyle::Rectangle { corner_size } => Some(
            Element::new("yjs:RectangleNodeStyle")
                .with_attr("cornerSize", corner_size.to_string())
                .with_attr("stroke", reference(PALETTE_STROKE))
                .with_attr("fill", reference(PALETTE_FILL)),
        ),
        // Carried fragments are re-embedded when they still parse on their own.
        NodeStyle::Opaque(blob) => match Element::parse(blob.as_str()) {
            Ok(element) => Some(element),
            Err(e) => {
                tracing::debug!(error = %e, "dropping opaque node style");
                None
            }
        },
    }
}

fn write_edge(edge: &Edge, layout: &LayoutConfig) -> Element {
    let mut element = Element::new("edge")
        .with_attr("id", edge.id.as_str())
        .with_attr("source", edge.source.as_str())
        .with_attr("target", edge.target.as_str());
    if let Some(port) = &edge.source_port {
        element.set_attr("sourceport", port.as_str());
    }
    if let Some(port) = &edge.target_port {
        element.set_attr("targetport", port.as_str());
    }

    if let Some(label) = &edge.label {
        element.push_child(data(KEY_EDGE_LABELS, labels(label, &layout.edge_label_size)));
    }
    if let Some(style) = &edge.style {
        element.push_child(data(KEY_EDGE_STYLE, edge_style(style)));
    }

    element
}

fn edge_style(style: &EdgeStyle) -> Element {
    match style {
        EdgeStyle::Polyline {
            smoothing_length,
            target_arrow,
        } => Element::new("yjs:PolylineEdgeStyle")
            .with_attr("smoothingLength", smoothing_length.to_string())
            .with_attr("sourceArrow", reference(PALETTE_ARROW))
            .with_child(
                Element::new("yjs:PolylineEdgeStyle.targetArrow").with_child(
                    Element::new("yjs:Arrow")
                        .with_attr("fill", "BLACK")
                        .with_attr("type", target_arrow.as_str()),
                ),
            ),
    }
}
