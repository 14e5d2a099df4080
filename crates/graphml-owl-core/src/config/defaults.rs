//! Default values for graphml-owl configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Ontology Defaults
// ============================================================================

/// Label given to every generated `owl:Ontology`.
pub const DEFAULT_ONTOLOGY_LABEL: &str = "Converted from yFiles GraphML";

/// Language tag written on `rdfs:label` elements.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Prefix of the `rdfs:comment` that carries a node's original style.
pub const DEFAULT_STYLE_COMMENT_PREFIX: &str = "Original style: ";

/// Prefix of a class id derived from a node without a usable label.
pub const DEFAULT_CLASS_FALLBACK_PREFIX: &str = "Class_";

/// Prefix of a property id derived from an edge without a usable label.
/// The raw target node id is appended.
pub const DEFAULT_PROPERTY_FALLBACK_PREFIX: &str = "has_connection_to_";

/// Text prepended to the generation timestamp in `owl:versionInfo`.
pub const VERSION_INFO_PREFIX: &str = "Created ";

// ============================================================================
// Layout Defaults
// ============================================================================

/// Horizontal distance between consecutive synthesized nodes.
pub const DEFAULT_NODE_SPACING: f64 = 100.0;

/// Width of a synthesized node.
pub const DEFAULT_NODE_WIDTH: f64 = 60.0;

/// Height of a synthesized node.
pub const DEFAULT_NODE_HEIGHT: f64 = 40.0;

/// Preferred size written on node labels.
pub const DEFAULT_NODE_LABEL_SIZE: &str = "121,24";

/// Preferred size written on edge labels.
pub const DEFAULT_EDGE_LABEL_SIZE: &str = "98,24";

/// Corner radius of the synthesized rectangle node style.
pub const DEFAULT_CORNER_SIZE: f64 = 3.5;

/// Smoothing length of the synthesized polyline edge style.
pub const DEFAULT_SMOOTHING_LENGTH: f64 = 100.0;

/// Ports declared on every synthesized node.
pub const DEFAULT_PORTS: &[&str] = &["p0", "p1"];

/// Port every synthesized edge attaches to at both ends.
pub const DEFAULT_EDGE_PORT: &str = "p0";

// ============================================================================
// Storage Defaults
// ============================================================================

/// Project-local configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "graphml-owl.toml";

/// Directory under the user config dir holding `config.toml`.
pub const DEFAULT_CONFIG_DIR: &str = "graphml-owl";

/// Whether outputs are written to a temp file and renamed into place.
pub const DEFAULT_ATOMIC_WRITES: bool = true;

// ============================================================================
// Round-trip Defaults
// ============================================================================

/// Diagram read by a round trip when no path is given.
pub const DEFAULT_GRAPHML_INPUT: &str = "onto_ed.xml";

/// Ontology written by a round trip when no path is given.
pub const DEFAULT_OWL_OUTPUT: &str = "ontology.owl";

/// Restored diagram written by a round trip when no path is given.
pub const DEFAULT_GRAPHML_OUTPUT: &str = "restored_graphml.xml";
