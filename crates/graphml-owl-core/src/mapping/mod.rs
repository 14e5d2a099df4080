//! Structural mapping between graphs and ontologies.
//!
//! ## Directions
//!
//! - [`GraphToOntology`] - nodes become classes, edges become object
//!   properties; visual style survives only as an annotation
//! - [`OntologyToGraph`] - classes become nodes, properties become edges;
//!   layout, styling and ports are synthesized from fixed values
//!
//! Both mappers are pure: the output only depends on the input document and
//! the mapper's configuration. Neither is the inverse of the other. A
//! graph that goes through both directions keeps its labels and its
//! domain/range topology but gets new ids, positions and styles.
//!
//! Items that cannot be mapped are left out of the output and recorded as a
//! [`MappingSkip`]; they never make a mapping fail.

mod forward;
mod reverse;

pub use forward::GraphToOntology;
pub use reverse::OntologyToGraph;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-fatal, per-item condition that left something out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingSkip {
    /// An edge endpoint does not name a node that produced a class.
    UnresolvedEdge { edge: String, endpoint: String },
    /// A property's domain or range does not name a known class.
    UnresolvedProperty { property: String, class: String },
    /// A class id was already taken, so no new entry was produced for it.
    DuplicateClass { class: String },
}

impl fmt::Display for MappingSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedEdge { edge, endpoint } => {
                write!(f, "edge {edge:?} references unknown node {endpoint:?}")
            }
            Self::UnresolvedProperty { property, class } => {
                write!(f, "property {property:?} references unknown class {class:?}")
            }
            Self::DuplicateClass { class } => write!(f, "class {class:?} already mapped"),
        }
    }
}

/// Items a mapping run left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    pub skipped: Vec<MappingSkip>,
}

impl MappingReport {
    /// Records a skipped item.
    pub(crate) fn skip(&mut self, skip: MappingSkip) {
        tracing::debug!(%skip, "mapping skip");
        self.skipped.push(skip);
    }

    /// True if nothing was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
