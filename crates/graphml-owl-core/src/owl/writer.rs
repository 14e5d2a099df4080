use chrono::{DateTime, Local, NaiveDateTime};

use crate::config::{OntologyConfig, VERSION_INFO_PREFIX};
use crate::model::{Class, ObjectProperty, OntologyDocument};
use crate::vocab::ONTOLOGY_PREFIXES;
use crate::xml::Element;

/// Document-level metadata written on `owl:Ontology`.
///
/// Kept apart from [`OntologyDocument`] so that mapping stays independent of
/// the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyHeader {
    /// `rdfs:label` of the ontology.
    pub label: String,
    /// Language tag for every `rdfs:label`.
    pub language: String,
    /// Generation time, local and without offset.
    pub created: NaiveDateTime,
}

impl OntologyHeader {
    /// Header stamped with the given local time.
    pub fn new(config: &OntologyConfig, created: NaiveDateTime) -> Self {
        Self {
            label: config.label.clone(),
            language: config.language.clone(),
            created,
        }
    }

    /// Header stamped with the current local time.
    pub fn now(config: &OntologyConfig) -> Self {
        let now: DateTime<Local> = Local::now();
        Self::new(config, now.naive_local())
    }

    /// `owl:versionInfo` text, e.g. `Created 2024-05-01T09:30:00.123456`.
    pub fn version_info(&self) -> String {
        format!(
            "{}{}",
            VERSION_INFO_PREFIX,
            self.created.format("%Y-%m-%dT%H:%M:%S%.6f")
        )
    }
}

/// Builds the `rdf:RDF` root element for an ontology.
///
/// All classes are written before all properties, each group in document
/// order.
pub fn write_ontology(ontology: &OntologyDocument, header: &OntologyHeader) -> Element {
    let mut root = Element::new("rdf:RDF");
    for (prefix, uri) in ONTOLOGY_PREFIXES {
        root.set_attr(format!("xmlns:{prefix}"), *uri);
    }

    root.push_child(
        Element::new("owl:Ontology")
            .with_attr("rdf:about", "")
            .with_child(label(&header.label, &header.language))
            .with_child(Element::new("owl:versionInfo").with_text(header.version_info())),
    );

    for class in &ontology.classes {
        root.push_child(write_class(class, &header.language));
    }
    for property in ontology.object_properties.values() {
        root.push_child(write_property(property, &header.language));
    }

    root
}

fn label(text: &str, language: &str) -> Element {
    let element = Element::new("rdfs:label").with_attr("xml:lang", language);
    if text.is_empty() {
        element
    } else {
        element.with_text(text)
    }
}

fn write_class(class: &Class, language: &str) -> Element {
    let mut element = Element::new("owl:Class").with_attr("rdf:ID", class.id.as_str());
    if let Some(text) = &class.label {
        element.push_child(label(text, language));
    }
    if let Some(annotation) = &class.annotation {
        element.push_child(Element::new("rdfs:comment").with_text(annotation.as_str()));
    }
    element
}

fn write_property(property: &ObjectProperty, language: &str) -> Element {
    let mut element = Element::new("owl:ObjectProperty").with_attr("rdf:ID", property.id.as_str());
    if let Some(text) = &property.label {
        element.push_child(label(text, language));
    }
    element.push_child(
        Element::new("rdfs:domain").with_attr("rdf:resource", format!("#{}", property.domain)),
    );
    element.push_child(
        Element::new("rdfs:range").with_attr("rdf:resource", format!("#{}", property.range)),
    );
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn header() -> OntologyHeader {
        let created = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 123456)
            .unwrap();
        OntologyHeader::new(&OntologyConfig::default(), created)
    }

    fn sample() -> OntologyDocument {
        let mut ontology = OntologyDocument::new();
        ontology.classes.push(Class {
            id: "Big_Car".to_string(),
            label: Some("Big Car".to_string()),
            annotation: Some("Original style: <y:NodeStyle/>".to_string()),
        });
        ontology.classes.push(Class {
            id: "Class_n2".to_string(),
            label: None,
            annotation: None,
        });
        ontology.insert_object_property(ObjectProperty {
            id: "has_connection_to_n2".to_string(),
            label: None,
            domain: "Big_Car".to_string(),
            range: "Class_n2".to_string(),
        });
        ontology
    }

    #[test]
    fn test_version_info() {
        assert_eq!(header().version_info(), "Created 2024-05-01T09:30:00.123456");
    }

    #[test]
    fn test_root_and_header() {
        let root = write_ontology(&OntologyDocument::new(), &header());
        assert_eq!(root.name, "rdf:RDF");
        let prefixes: Vec<_> = root.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(prefixes, vec!["xmlns:rdf", "xmlns:rdfs", "xmlns:owl", "xmlns:xsd"]);

        let xml = root.to_xml_string().unwrap();
        assert!(xml.contains(
            r#"<owl:Ontology rdf:about=""><rdfs:label xml:lang="en">Converted from yFiles GraphML</rdfs:label><owl:versionInfo>Created 2024-05-01T09:30:00.123456</owl:versionInfo></owl:Ontology>"#
        ));
    }

    #[test]
    fn test_classes_and_properties() {
        let xml = write_ontology(&sample(), &header()).to_xml_string().unwrap();

        assert!(xml.contains(
            r#"<owl:Class rdf:ID="Big_Car"><rdfs:label xml:lang="en">Big Car</rdfs:label><rdfs:comment>Original style: &lt;y:NodeStyle/&gt;</rdfs:comment></owl:Class>"#
        ));
        assert!(xml.contains(r#"<owl:Class rdf:ID="Class_n2"/>"#));
        assert!(xml.contains(
            r##"<owl:ObjectProperty rdf:ID="has_connection_to_n2"><rdfs:domain rdf:resource="#Big_Car"/><rdfs:range rdf:resource="#Class_n2"/></owl:ObjectProperty>"##
        ));

        let class_pos = xml.find("Class_n2").unwrap();
        let property_pos = xml.find("owl:ObjectProperty").unwrap();
        assert!(class_pos < property_pos);
    }

    #[test]
    fn test_written_document_reads_back() {
        let original = sample();
        let xml = crate::owl::to_owl_string(&original, &header()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rdf:RDF"));

        let read = crate::owl::parse_owl(&xml).unwrap();
        assert_eq!(read, original);
    }

    #[test]
    fn test_whitespace_label_reads_back() {
        let mut ontology = OntologyDocument::new();
        ontology.classes.push(Class {
            id: "___".to_string(),
            label: Some("   ".to_string()),
            annotation: None,
        });
        let xml = crate::owl::to_owl_string(&ontology, &header()).unwrap();
        let read = crate::owl::parse_owl(&xml).unwrap();
        assert_eq!(read.classes[0].label.as_deref(), Some("   "));

        let graph = crate::mapping::OntologyToGraph::default().map(&read);
        assert_eq!(graph.nodes[0].label.as_deref(), Some("   "));
    }
}
