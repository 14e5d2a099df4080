use std::fs;
use std::path::Path;

use graphml_owl_core::{
    Config, ConvertError, Converter, Direction, FileStorage, StorageConfig, StorageError,
};
use tempfile::TempDir;

const DIAGRAM: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns"
         xmlns:y="http://www.yworks.com/xml/yfiles-common/2.0"
         xmlns:x="http://www.yworks.com/xml/yfiles-common/markup/3.0"
         xmlns:yjs="http://www.yworks.com/xml/yfiles-for-html/3.0/xaml">
  <graph id="G" edgedefault="directed">
    <node id="n1">
      <data key="d1"><x:List><y:Label Text="Person"/></x:List></data>
      <data key="d4"><y:NodeStyle><yjs:ShapeNodeStyle fill="#fff"/></y:NodeStyle></data>
    </node>
    <node id="n2">
      <data key="d1"><x:List><y:Label Text="Car"/></x:List></data>
    </node>
    <node id="n3"/>
    <edge id="e1" source="n1" target="n2">
      <data key="d6"><x:List><y:Label Text="owns"/></x:List></data>
    </edge>
    <edge id="e2" source="n2" target="n3"/>
    <edge id="e3" source="n2" target="missing"/>
  </graph>
</graphml>"##;

fn create_converter() -> (Converter<FileStorage>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let converter = Converter::new(FileStorage::new(), Config::default());
    (converter, temp_dir)
}

fn write_input(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_graphml_to_owl() {
    let (converter, temp) = create_converter();
    let input = write_input(temp.path(), "diagram.graphml", DIAGRAM);
    let output = temp.path().join("ontology.owl");

    let summary = converter.graphml_to_owl(&input, &output).unwrap();
    assert_eq!(summary.direction, Direction::GraphmlToOwl);
    assert_eq!((summary.nodes, summary.edges), (3, 3));
    assert_eq!((summary.classes, summary.properties), (3, 2));
    assert_eq!(summary.report.skipped.len(), 1);

    let owl = fs::read_to_string(&output).unwrap();
    assert!(owl.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(owl.contains(r#"<owl:Class rdf:ID="Person">"#));
    assert!(owl.contains(r#"<owl:Class rdf:ID="Class_n3"/>"#));
    assert!(owl.contains("Original style: &lt;y:NodeStyle&gt;"));
    assert!(owl.contains(r#"<owl:ObjectProperty rdf:ID="owns">"#));
    assert!(owl.contains(r#"<owl:ObjectProperty rdf:ID="has_connection_to_n3">"#));
    assert!(owl.contains(r##"<rdfs:range rdf:resource="#Class_n3"/>"##));
    assert!(owl.contains("<owl:versionInfo>Created "));
}

#[test]
fn test_round_trip_files() {
    let (converter, temp) = create_converter();
    let input = write_input(temp.path(), "onto_ed.xml", DIAGRAM);
    let owl = temp.path().join("ontology.owl");
    let restored = temp.path().join("restored_graphml.xml");

    let (forward, reverse) = converter.round_trip(&input, &owl, &restored).unwrap();
    assert_eq!(forward.properties, 2);
    assert_eq!(reverse.direction, Direction::OwlToGraphml);
    assert_eq!((reverse.nodes, reverse.edges), (3, 2));
    assert!(reverse.report.is_complete());

    let graphml = fs::read_to_string(&restored).unwrap();
    let mut lines = graphml.lines();
    assert_eq!(
        lines.next(),
        Some(r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)
    );
    assert_eq!(lines.next(), Some("<!--Created by yFiles for HTML 3.0.0.4-->"));
    assert_eq!(graphml.matches("<key ").count(), 15);
    assert!(graphml.contains(r#"<y:Label Text="Person" PreferredSize="121,24"/>"#));
    assert!(graphml.contains(r#"<y:Label Text="Class_n3" PreferredSize="121,24"/>"#));
    assert!(graphml.contains(r#"<y:RectD X="200" Y="0" Width="60" Height="40"/>"#));
    assert!(graphml.contains(
        r#"<edge id="e1" source="n1" target="n2" sourceport="p0" targetport="p0">"#
    ));
}

#[test]
fn test_missing_input_is_read_error() {
    let (converter, temp) = create_converter();
    let output = temp.path().join("out.owl");

    let err = converter
        .graphml_to_owl(&temp.path().join("nope.graphml"), &output)
        .unwrap_err();
    assert_eq!(err.direction, Direction::GraphmlToOwl);
    assert!(matches!(err.source, StorageError::Read { .. }));
    assert!(!output.exists());
}

#[test]
fn test_malformed_input_is_parse_error() {
    let (converter, temp) = create_converter();
    let input = write_input(temp.path(), "broken.owl", "<rdf:RDF><owl:Class></rdf:RDF>");
    let output = temp.path().join("out.graphml");

    let err: ConvertError = converter.owl_to_graphml(&input, &output).unwrap_err();
    assert_eq!(err.source.step(), "parse");
    assert!(err.to_string().contains("OWL to GraphML"));
    assert!(!output.exists());
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let (converter, temp) = create_converter();
    let input = write_input(temp.path(), "broken.graphml", "<graphml><graph>");
    let output = write_input(temp.path(), "out.owl", "previous");

    assert!(converter.graphml_to_owl(&input, &output).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_unwritable_output_is_write_error() {
    let (converter, temp) = create_converter();
    let input = write_input(temp.path(), "diagram.graphml", DIAGRAM);
    let output = temp.path().join("no-such-dir").join("out.owl");

    let err = converter.graphml_to_owl(&input, &output).unwrap_err();
    assert!(matches!(err.source, StorageError::Write { .. }));
}

#[test]
fn test_non_atomic_storage() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::with_config(StorageConfig {
        atomic_writes: false,
    });
    let converter = Converter::new(storage, Config::default());
    let input = write_input(temp.path(), "diagram.graphml", DIAGRAM);
    let output = temp.path().join("ontology.owl");

    converter.graphml_to_owl(&input, &output).unwrap();
    assert!(fs::read_to_string(&output).unwrap().contains("owl:Ontology"));
}

#[test]
fn test_document_without_graph_converts_to_empty_ontology() {
    let (converter, temp) = create_converter();
    let input = write_input(
        temp.path(),
        "empty.graphml",
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns"/>"#,
    );
    let output = temp.path().join("empty.owl");

    let summary = converter.graphml_to_owl(&input, &output).unwrap();
    assert_eq!((summary.classes, summary.properties), (0, 0));
    assert!(fs::read_to_string(&output).unwrap().contains("<owl:Ontology"));
}

#[cfg(unix)]
#[test]
fn test_atomic_write_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (converter, temp) = create_converter();
    let input = write_input(temp.path(), "diagram.graphml", DIAGRAM);
    let output = write_input(temp.path(), "out.owl", "previous");
    fs::set_permissions(&output, fs::Permissions::from_mode(0o644)).unwrap();

    converter.graphml_to_owl(&input, &output).unwrap();

    let mode = fs::metadata(&output).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert!(fs::read_to_string(&output).unwrap().contains("owl:Ontology"));
}

#[cfg(unix)]
#[test]
fn test_atomic_write_new_file_matches_plain_write() {
    use std::os::unix::fs::PermissionsExt;

    let (converter, temp) = create_converter();
    let input = write_input(temp.path(), "diagram.graphml", DIAGRAM);
    let plain = write_input(temp.path(), "plain.txt", "x");
    let output = temp.path().join("fresh.owl");

    converter.graphml_to_owl(&input, &output).unwrap();

    let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&output), mode(&plain));
}
