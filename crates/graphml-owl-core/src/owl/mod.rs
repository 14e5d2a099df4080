//! OWL documents in RDF/XML syntax.
//!
//! Only the subset this tool produces is understood: `owl:Class` and
//! `owl:ObjectProperty` elements identified by `rdf:ID`, with `rdfs:label`,
//! `rdfs:comment`, `rdfs:domain` and `rdfs:range` children.

mod reader;
mod writer;

pub use reader::read_ontology;
pub use writer::{write_ontology, OntologyHeader};

use crate::model::OntologyDocument;
use crate::xml::{Element, XmlError, XML_DECLARATION};

/// Parses RDF/XML text into an ontology.
pub fn parse_owl(xml: &str) -> Result<OntologyDocument, XmlError> {
    let root = Element::parse(xml)?;
    Ok(read_ontology(&root))
}

/// Renders an ontology as a complete RDF/XML document.
pub fn to_owl_string(ontology: &OntologyDocument, header: &OntologyHeader) -> Result<String, XmlError> {
    write_ontology(ontology, header).to_document(XML_DECLARATION, None)
}
