use std::collections::HashMap;

use crate::config::{ClassPolicy, OntologyConfig};
use crate::model::{Class, GraphDocument, Node, ObjectProperty, OntologyDocument};
use crate::sanitize::sanitize;

use super::{MappingReport, MappingSkip};

/// Maps a diagram onto an ontology.
///
/// Every node becomes an `owl:Class` and every edge between known nodes
/// contributes to an `owl:ObjectProperty`:
///
/// - class id: sanitized node label, else `Class_<node id>`
/// - property id: sanitized edge label, else `has_connection_to_<target node id>`
/// - a property id seen again keeps its first position and label, but its
///   domain/range are replaced by the latest edge's endpoints
#[derive(Debug, Clone, Default)]
pub struct GraphToOntology {
    config: OntologyConfig,
}

impl GraphToOntology {
    pub fn new(config: OntologyConfig) -> Self {
        Self { config }
    }

    /// Maps a graph, discarding the report.
    pub fn map(&self, graph: &GraphDocument) -> OntologyDocument {
        self.map_with_report(graph).0
    }

    /// Maps a graph and reports the edges that could not be mapped.
    pub fn map_with_report(&self, graph: &GraphDocument) -> (OntologyDocument, MappingReport) {
        let mut ontology = OntologyDocument::new();
        let mut report = MappingReport::default();

        let node_classes = self.derive_classes(graph, &mut ontology, &mut report);
        self.derive_properties(graph, &node_classes, &mut ontology, &mut report);

        (ontology, report)
    }

    /// Class id for a node, from its label or its id.
    pub fn class_id(&self, node: &Node) -> String {
        sanitize(node.label.as_deref())
            .unwrap_or_else(|| format!("{}{}", self.config.class_fallback_prefix, node.id))
    }

    /// Property id for an edge label, falling back to the raw target node id.
    pub fn property_id(&self, label: Option<&str>, target: &str) -> String {
        sanitize(label)
            .unwrap_or_else(|| format!("{}{}", self.config.property_fallback_prefix, target))
    }

    fn derive_classes<'g>(
        &self,
        graph: &'g GraphDocument,
        ontology: &mut OntologyDocument,
        report: &mut MappingReport,
    ) -> HashMap<&'g str, String> {
        let mut node_classes = HashMap::with_capacity(graph.nodes.len());

        for node in &graph.nodes {
            let class_id = self.class_id(node);

            let merge = self.config.class_policy == ClassPolicy::MergeById
                && ontology.class(&class_id).is_some();
            if merge {
                report.skip(MappingSkip::DuplicateClass {
                    class: class_id.clone(),
                });
            } else {
                ontology.classes.push(Class {
                    id: class_id.clone(),
                    label: node.label.clone(),
                    annotation: node
                        .style_blob()
                        .map(|blob| format!("{}{}", self.config.style_comment_prefix, blob.as_str())),
                });
            }

            // A repeated node id points at the class of its last occurrence.
            node_classes.insert(node.id.as_str(), class_id);
        }

        node_classes
    }

    fn derive_properties(
        &self,
        graph: &GraphDocument,
        node_classes: &HashMap<&str, String>,
        ontology: &mut OntologyDocument,
        report: &mut MappingReport,
    ) {
        for edge in &graph.edges {
            let source = node_classes.get(edge.source.as_str());
            let target = node_classes.get(edge.target.as_str());
            let (Some(source), Some(target)) = (source, target) else {
                let endpoint = if source.is_none() { &edge.source } else { &edge.target };
                report.skip(MappingSkip::UnresolvedEdge {
                    edge: edge.id.clone(),
                    endpoint: endpoint.clone(),
                });
                continue;
            };

            let label = edge.label.as_deref().filter(|l| !l.is_empty());
            let property_id = self.property_id(label, &edge.target);

            let property = ontology
                .object_properties
                .entry(property_id.clone())
                .or_insert_with(|| ObjectProperty {
                    id: property_id,
                    label: label.map(str::to_string),
                    domain: String::new(),
                    range: String::new(),
                });
            property.domain = source.clone();
            property.range = target.clone();
        }
    }
}
