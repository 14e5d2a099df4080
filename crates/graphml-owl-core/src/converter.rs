use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::graphml;
use crate::mapping::{GraphToOntology, MappingReport, OntologyToGraph};
use crate::owl::{self, OntologyHeader};
use crate::storage::{Storage, StorageError};

/// Direction of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    GraphmlToOwl,
    OwlToGraphml,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::GraphmlToOwl => write!(f, "GraphML to OWL"),
            Direction::OwlToGraphml => write!(f, "OWL to GraphML"),
        }
    }
}

/// Errors from a conversion run. Only I/O steps can fail.
#[derive(Debug, Error)]
#[error("{direction} conversion failed: {source}")]
pub struct ConvertError {
    pub direction: Direction,
    #[source]
    pub source: StorageError,
}

/// Outcome of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub direction: Direction,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Classes in the ontology that was read or written.
    pub classes: usize,
    /// Object properties in the ontology that was read or written.
    pub properties: usize,
    /// Nodes in the graph that was read or written.
    pub nodes: usize,
    /// Edges in the graph that was read or written.
    pub edges: usize,
    pub report: MappingReport,
}

/// Runs conversions between files.
///
/// Each run is read, parse, map, serialize, write. Nothing is written unless
/// every earlier step succeeded.
pub struct Converter<S: Storage> {
    storage: S,
    config: Config,
}

impl<S: Storage> Converter<S> {
    /// Creates a new Converter with the given storage backend.
    pub fn new(storage: S, config: Config) -> Self {
        Self { storage, config }
    }

    /// Converts a GraphML diagram into an OWL ontology.
    pub fn graphml_to_owl(&self, input: &Path, output: &Path) -> Result<ConversionSummary, ConvertError> {
        self.run_graphml_to_owl(input, output).map_err(|source| ConvertError {
            direction: Direction::GraphmlToOwl,
            source,
        })
    }

    /// Converts an OWL ontology into a GraphML diagram.
    pub fn owl_to_graphml(&self, input: &Path, output: &Path) -> Result<ConversionSummary, ConvertError> {
        self.run_owl_to_graphml(input, output).map_err(|source| ConvertError {
            direction: Direction::OwlToGraphml,
            source,
        })
    }

    /// Converts a diagram to an ontology, then the ontology back to a diagram.
    pub fn round_trip(
        &self,
        graphml_input: &Path,
        owl_output: &Path,
        graphml_output: &Path,
    ) -> Result<(ConversionSummary, ConversionSummary), ConvertError> {
        let forward = self.graphml_to_owl(graphml_input, owl_output)?;
        let reverse = self.owl_to_graphml(owl_output, graphml_output)?;
        Ok((forward, reverse))
    }

    fn run_graphml_to_owl(&self, input: &Path, output: &Path) -> Result<ConversionSummary, StorageError> {
        let text = self.storage.read_document(input)?;
        let graph = graphml::parse_graphml(&text).map_err(|e| StorageError::parse(input, e))?;

        let mapper = GraphToOntology::new(self.config.ontology.clone());
        let (ontology, report) = mapper.map_with_report(&graph);

        let header = OntologyHeader::now(&self.config.ontology);
        let document = owl::to_owl_string(&ontology, &header).map_err(|e| StorageError::serialize(output, e))?;
        self.storage.write_document(output, &document)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            classes = ontology.classes.len(),
            properties = ontology.object_properties.len(),
            skipped = report.skipped.len(),
            "converted GraphML to OWL"
        );

        Ok(ConversionSummary {
            direction: Direction::GraphmlToOwl,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            classes: ontology.classes.len(),
            properties: ontology.object_properties.len(),
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            report,
        })
    }

    fn run_owl_to_graphml(&self, input: &Path, output: &Path) -> Result<ConversionSummary, StorageError> {
        let text = self.storage.read_document(input)?;
        let ontology = owl::parse_owl(&text).map_err(|e| StorageError::parse(input, e))?;

        let mapper = OntologyToGraph::new(self.config.layout.clone());
        let (graph, report) = mapper.map_with_report(&ontology);

        let document = graphml::to_graphml_string(&graph, &self.config.layout)
            .map_err(|e| StorageError::serialize(output, e))?;
        self.storage.write_document(output, &document)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            classes = ontology.classes.len(),
            properties = ontology.object_properties.len(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            skipped = report.skipped.len(),
            "converted OWL to GraphML"
        );

        Ok(ConversionSummary {
            direction: Direction::OwlToGraphml,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            classes: ontology.classes.len(),
            properties: ontology.object_properties.len(),
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            report,
        })
    }
}
