use std::collections::HashMap;

use crate::config::{
    LayoutConfig, DEFAULT_CORNER_SIZE, DEFAULT_EDGE_PORT, DEFAULT_PORTS, DEFAULT_SMOOTHING_LENGTH,
};
use crate::model::{
    ArrowKind, Class, Edge, EdgeStyle, GraphDocument, Node, NodeStyle, OntologyDocument, Rect,
};

use super::{MappingReport, MappingSkip};

/// Maps an ontology onto a diagram.
///
/// Nothing visual survives in an ontology, so everything is synthesized:
///
/// - classes become nodes `n0, n1, ...` in document order; a repeated class
///   id maps onto the node of its first occurrence
/// - nodes sit on one row at `x = spacing * index`, `y = 0`, all the same size
///   (a placeholder layout, not a drawing algorithm)
/// - every node gets the same rectangle style and ports `p0`, `p1`
/// - properties become edges `e0, e1, ...` from the domain node's `p0` to the
///   range node's `p0`, skipping properties whose classes are unknown
#[derive(Debug, Clone, Default)]
pub struct OntologyToGraph {
    layout: LayoutConfig,
}

impl OntologyToGraph {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Maps an ontology, discarding the report.
    pub fn map(&self, ontology: &OntologyDocument) -> GraphDocument {
        self.map_with_report(ontology).0
    }

    /// Maps an ontology and reports what could not be mapped.
    pub fn map_with_report(&self, ontology: &OntologyDocument) -> (GraphDocument, MappingReport) {
        let mut graph = GraphDocument::new();
        let mut report = MappingReport::default();
        let mut class_nodes: HashMap<&str, String> = HashMap::with_capacity(ontology.classes.len());

        for class in &ontology.classes {
            if class_nodes.contains_key(class.id.as_str()) {
                report.skip(MappingSkip::DuplicateClass {
                    class: class.id.clone(),
                });
                continue;
            }
            let node = self.synthesize_node(graph.nodes.len(), class);
            class_nodes.insert(class.id.as_str(), node.id.clone());
            graph.nodes.push(node);
        }

        for property in ontology.object_properties.values() {
            let source = class_nodes.get(property.domain.as_str());
            let target = class_nodes.get(property.range.as_str());
            let (Some(source), Some(target)) = (source, target) else {
                let class = if source.is_none() { &property.domain } else { &property.range };
                report.skip(MappingSkip::UnresolvedProperty {
                    property: property.id.clone(),
                    class: class.clone(),
                });
                continue;
            };

            let label = property
                .label
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or(&property.id);

            graph.edges.push(Edge {
                id: format!("e{}", graph.edges.len()),
                source: source.clone(),
                target: target.clone(),
                label: Some(label.to_string()),
                source_port: Some(DEFAULT_EDGE_PORT.to_string()),
                target_port: Some(DEFAULT_EDGE_PORT.to_string()),
                style: Some(EdgeStyle::Polyline {
                    smoothing_length: DEFAULT_SMOOTHING_LENGTH,
                    target_arrow: ArrowKind::Triangle,
                }),
            });
        }

        (graph, report)
    }

    /// Position of the node at `index` on the single row.
    pub fn geometry(&self, index: usize) -> Rect {
        Rect {
            x: self.layout.node_spacing * index as f64,
            y: 0.0,
            width: self.layout.node_width,
            height: self.layout.node_height,
        }
    }

    fn synthesize_node(&self, index: usize, class: &Class) -> Node {
        let label = class
            .label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(&class.id);

        Node {
            id: format!("n{index}"),
            label: Some(label.to_string()),
            style: Some(NodeStyle::Rectangle {
                corner_size: DEFAULT_CORNER_SIZE,
            }),
            geometry: Some(self.geometry(index)),
            ports: DEFAULT_PORTS.iter().map(|p| p.to_string()).collect(),
        }
    }
}
