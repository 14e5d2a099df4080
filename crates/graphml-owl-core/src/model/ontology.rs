//! Ontology side of the conversion: classes and object properties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An OWL class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Identifier-safe name used as `rdf:ID`.
    pub id: String,
    /// Original display text, which may differ from `id` after sanitization.
    pub label: Option<String>,
    /// Free-text annotation kept for traceability (the source node's style).
    pub annotation: Option<String>,
}

/// An OWL object property with a single domain/range pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectProperty {
    /// Identifier-safe name used as `rdf:ID`.
    pub id: String,
    /// Original display text, absent if the source edge had none.
    pub label: Option<String>,
    /// Class id of the subject side.
    pub domain: String,
    /// Class id of the object side.
    pub range: String,
}

/// An ontology document.
///
/// Classes are a list rather than a map: the graph mapper emits one class per
/// node even when two nodes sanitize to the same id, and that cardinality is
/// preserved through writing. Lookups by id resolve to the first occurrence.
///
/// Object properties are an insertion-ordered map, so iteration order is the
/// order in which each id was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyDocument {
    pub classes: Vec<Class>,
    pub object_properties: IndexMap<String, ObjectProperty>,
}

impl OntologyDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a class by id. The first class with that id wins.
    pub fn class(&self, id: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Looks up an object property by id.
    pub fn object_property(&self, id: &str) -> Option<&ObjectProperty> {
        self.object_properties.get(id)
    }

    /// Adds a property unless one with the same id already exists.
    ///
    /// Returns false when the id was taken; the existing entry is kept.
    pub fn insert_object_property(&mut self, property: ObjectProperty) -> bool {
        if self.object_properties.contains_key(&property.id) {
            return false;
        }
        self.object_properties.insert(property.id.clone(), property);
        true
    }
}
