//! In-memory documents exchanged between the readers, mappers and writers.
//!
//! - [`GraphDocument`] - a labeled directed graph with optional presentation data
//! - [`OntologyDocument`] - classes and object properties with domain/range axioms
//!
//! Each document is a plain owned value. Mappers consume one by reference and
//! produce a fresh instance of the other; nothing is shared between them.

mod graph;
mod ontology;

pub use graph::{ArrowKind, Edge, EdgeStyle, GraphDocument, Node, NodeStyle, Rect, StyleBlob};
pub use ontology::{Class, ObjectProperty, OntologyDocument};
