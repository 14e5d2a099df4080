//! Conversion between yFiles GraphML diagrams and OWL ontologies.
//!
//! The pipeline for either direction is the same:
//!
//! ```text
//! file -> [Storage] -> text -> [xml] -> Element -> reader -> document
//!      -> [mapping] -> document -> writer -> Element -> [xml] -> text -> [Storage] -> file
//! ```
//!
//! Only [`mapping`] carries design decisions; the rest is plumbing.
//!
//! # Example
//!
//! ```ignore
//! use graphml_owl_core::{Config, Converter, FileStorage};
//! use std::path::Path;
//!
//! let converter = Converter::new(FileStorage::new(), Config::load()?);
//! converter.graphml_to_owl(Path::new("diagram.graphml"), Path::new("ontology.owl"))?;
//! ```

pub mod config;
pub mod converter;
pub mod graphml;
pub mod mapping;
pub mod model;
pub mod owl;
pub mod sanitize;
pub mod storage;
pub mod vocab;
pub mod xml;

pub use config::{ClassPolicy, Config, ConfigError, LayoutConfig, OntologyConfig, StorageConfig};
pub use converter::{ConversionSummary, ConvertError, Converter, Direction};
pub use mapping::{GraphToOntology, MappingReport, MappingSkip, OntologyToGraph};
pub use model::{Class, Edge, GraphDocument, Node, ObjectProperty, OntologyDocument};
pub use owl::OntologyHeader;
pub use sanitize::sanitize;
pub use storage::{FileStorage, Storage, StorageError};
