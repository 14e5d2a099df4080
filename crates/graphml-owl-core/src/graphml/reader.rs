use crate::model::{Edge, GraphDocument, Node, NodeStyle, Rect, StyleBlob};
use crate::vocab::{GRAPHML_NS, YFILES_NS};
use crate::xml::Element;

/// Reads the first `graph` element below `root` into a [`GraphDocument`].
///
/// A document without a `graph` element yields an empty graph. Nodes and
/// edges are collected from the whole subtree in document order, so the
/// contents of nested group graphs are included.
pub fn read_graph(root: &Element) -> GraphDocument {
    let Some(graph) = root.find_descendant(GRAPHML_NS, "graph") else {
        tracing::debug!("no graph element found");
        return GraphDocument::new();
    };

    GraphDocument {
        nodes: graph
            .descendants(GRAPHML_NS, "node")
            .into_iter()
            .map(read_node)
            .collect(),
        edges: graph
            .descendants(GRAPHML_NS, "edge")
            .into_iter()
            .map(read_edge)
            .collect(),
    }
}

fn read_node(element: &Element) -> Node {
    Node {
        id: element.attr("id").unwrap_or_default().to_string(),
        label: first_label(element),
        style: read_style(element),
        geometry: read_geometry(element),
        ports: element
            .child_elements()
            .filter(|c| c.is(GRAPHML_NS, "port"))
            .filter_map(|c| c.attr("name"))
            .map(str::to_string)
            .collect(),
    }
}

fn read_edge(element: &Element) -> Edge {
    let attr = |name: &str| element.attr(name).map(str::to_string);
    Edge {
        id: attr("id").unwrap_or_default(),
        source: attr("source").unwrap_or_default(),
        target: attr("target").unwrap_or_default(),
        label: first_label(element),
        source_port: attr("sourceport"),
        target_port: attr("targetport"),
        style: None,
    }
}

/// `Text` of the first yFiles label anywhere below `element`.
///
/// A label without `Text` reads as empty text, not as a missing label.
fn first_label(element: &Element) -> Option<String> {
    element
        .find_descendant(YFILES_NS, "Label")
        .map(|label| label.attr("Text").unwrap_or_default().to_string())
}

/// The first yFiles `NodeStyle` below `element`, serialized as-is.
fn read_style(element: &Element) -> Option<NodeStyle> {
    let style = element.find_descendant(YFILES_NS, "NodeStyle")?;
    match style.to_xml_string() {
        Ok(fragment) => Some(NodeStyle::Opaque(StyleBlob::new(fragment))),
        Err(e) => {
            tracing::debug!(error = %e, "dropping unserializable node style");
            None
        }
    }
}

fn read_geometry(element: &Element) -> Option<Rect> {
    let rect = element.find_descendant(YFILES_NS, "RectD")?;
    let number = |name: &str| rect.attr(name).and_then(|v| v.trim().parse::<f64>().ok());
    Some(Rect {
        x: number("X")?,
        y: number("Y")?,
        width: number("Width")?,
        height: number("Height")?,
    })
}
