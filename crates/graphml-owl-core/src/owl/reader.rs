use crate::model::{Class, ObjectProperty, OntologyDocument};
use crate::vocab::{OWL_NS, RDFS_NS, RDF_NS};
use crate::xml::Element;

/// Reads every `owl:Class` and `owl:ObjectProperty` below `root`.
///
/// - elements without a non-empty `rdf:ID` are ignored
/// - labels and comments come from the first matching descendant
/// - a property needs both an `rdfs:domain` and an `rdfs:range`; only the
///   first of each is used
/// - a repeated property id keeps its first occurrence
///
/// Repeated class ids are all kept, matching what the graph mapper writes.
pub fn read_ontology(root: &Element) -> OntologyDocument {
    let mut ontology = OntologyDocument::new();

    for element in root.descendants(OWL_NS, "Class") {
        let Some(id) = element.attr_ns(RDF_NS, "ID").filter(|id| !id.is_empty()) else {
            continue;
        };
        ontology.classes.push(Class {
            id: id.to_string(),
            label: descendant_text(element, "label"),
            annotation: descendant_text(element, "comment"),
        });
    }

    for element in root.descendants(OWL_NS, "ObjectProperty") {
        let Some(id) = element.attr_ns(RDF_NS, "ID").filter(|id| !id.is_empty()) else {
            continue;
        };
        let (Some(domain), Some(range)) = (resource(element, "domain"), resource(element, "range")) else {
            tracing::debug!(property = id, "property without domain or range");
            continue;
        };
        let inserted = ontology.insert_object_property(ObjectProperty {
            id: id.to_string(),
            label: descendant_text(element, "label"),
            domain,
            range,
        });
        if !inserted {
            tracing::debug!(property = id, "repeated property id, keeping the first");
        }
    }

    ontology
}

fn descendant_text(element: &Element, local: &str) -> Option<String> {
    element.find_descendant(RDFS_NS, local).and_then(Element::text)
}

/// Local class id referenced by `rdf:resource` on the first `rdfs:<local>`.
fn resource(element: &Element, local: &str) -> Option<String> {
    let reference = element
        .find_descendant(RDFS_NS, local)?
        .attr_ns(RDF_NS, "resource")?;
    Some(reference.strip_prefix('#').unwrap_or(reference).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Ontology rdf:about="">
    <rdfs:label xml:lang="en">Converted from yFiles GraphML</rdfs:label>
  </owl:Ontology>
  <owl:Class rdf:ID="Person">
    <rdfs:label xml:lang="en">Person</rdfs:label>
    <rdfs:comment>Original style: &lt;y:NodeStyle/&gt;</rdfs:comment>
  </owl:Class>
  <owl:Class rdf:ID="Car"/>
  <owl:Class rdf:about="#Anonymous"/>
  <owl:ObjectProperty rdf:ID="owns">
    <rdfs:label xml:lang="en">owns</rdfs:label>
    <rdfs:domain rdf:resource="#Person"/>
    <rdfs:range rdf:resource="#Car"/>
    <rdfs:domain rdf:resource="#Car"/>
    <rdfs:range rdf:resource="#Person"/>
  </owl:ObjectProperty>
  <owl:ObjectProperty rdf:ID="dangling">
    <rdfs:domain rdf:resource="#Person"/>
  </owl:ObjectProperty>
  <owl:ObjectProperty rdf:ID="owns">
    <rdfs:domain rdf:resource="#Car"/>
    <rdfs:range rdf:resource="#Car"/>
  </owl:ObjectProperty>
</rdf:RDF>"##;

    #[test]
    fn test_reads_classes() {
        let ontology = read_ontology(&Element::parse(SAMPLE).unwrap());
        assert_eq!(ontology.classes.len(), 2);

        let person = &ontology.classes[0];
        assert_eq!(person.id, "Person");
        assert_eq!(person.label.as_deref(), Some("Person"));
        assert_eq!(person.annotation.as_deref(), Some("Original style: <y:NodeStyle/>"));

        let car = &ontology.classes[1];
        assert_eq!(car.label, None);
        assert_eq!(car.annotation, None);
    }

    #[test]
    fn test_reads_first_axiom_pair_and_first_property() {
        let ontology = read_ontology(&Element::parse(SAMPLE).unwrap());
        assert_eq!(ontology.object_properties.len(), 1);

        let owns = ontology.object_property("owns").unwrap();
        assert_eq!(owns.label.as_deref(), Some("owns"));
        assert_eq!(owns.domain, "Person");
        assert_eq!(owns.range, "Car");
    }

    #[test]
    fn test_empty_ids_are_ignored() {
        let xml = r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:ID=""/>
  <owl:Class rdf:ID="A"/>
  <owl:ObjectProperty rdf:ID="">
    <rdfs:domain rdf:resource="#A"/>
    <rdfs:range rdf:resource="#A"/>
  </owl:ObjectProperty>
</rdf:RDF>"##;
        let ontology = read_ontology(&Element::parse(xml).unwrap());
        assert_eq!(ontology.classes.len(), 1);
        assert_eq!(ontology.classes[0].id, "A");
        assert!(ontology.object_properties.is_empty());
    }

    #[test]
    fn test_resource_without_hash() {
        let xml = r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:ObjectProperty rdf:ID="p">
    <rdfs:domain rdf:resource="A"/>
    <rdfs:range rdf:resource="#B"/>
  </owl:ObjectProperty>
</rdf:RDF>"##;
        let ontology = read_ontology(&Element::parse(xml).unwrap());
        let p = ontology.object_property("p").unwrap();
        assert_eq!((p.domain.as_str(), p.range.as_str()), ("A", "B"));
    }
}
