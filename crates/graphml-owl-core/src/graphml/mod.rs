//! yFiles GraphML documents.
//!
//! Reading is defensive: vendor elements (labels, styles, geometry) are
//! optional everywhere and their absence is never an error. Writing produces
//! the fixed document frame yFiles for HTML expects (key declarations and a
//! shared style palette) around the graph's nodes and edges.

mod reader;
mod writer;

pub use reader::read_graph;
pub use writer::write_graph;

use crate::config::LayoutConfig;
use crate::model::GraphDocument;
use crate::vocab::GRAPHML_BANNER;
use crate::xml::{Element, XmlError, XML_DECLARATION_STANDALONE};

/// Parses GraphML text into a graph.
pub fn parse_graphml(xml: &str) -> Result<GraphDocument, XmlError> {
    let root = Element::parse(xml)?;
    Ok(read_graph(&root))
}

/// Renders a graph as a complete GraphML document.
pub fn to_graphml_string(graph: &GraphDocument, layout: &LayoutConfig) -> Result<String, XmlError> {
    write_graph(graph, layout).to_document(XML_DECLARATION_STANDALONE, Some(GRAPHML_BANNER))
}
