use super::*;
use std::path::PathBuf;

const YAML: &str = r#"
version: "0.1.0"
source: mswb
info:
  name: 魔术五笔
  author: tester
data:
  form:
    木:
      unicode: 26408
      component:
        shape:
          - glyph:
              - feature: 横
                start: [10.0, 40.0]
                curveList:
                  - command: h
                    parameterList: [80.0]
            reference: 木
  classifier:
    横: 1
form:
  alphabet: abcdefghijklmnopqrstuvwxyz
  mapping_type: 2
  mapping:
    木: m
  grouping: {}
  analysis:
    selector: [根少优先, 取大优先]
    degenerator:
      feature:
        提: 横
      no_cross: true
encoder:
  nodes:
    - id: "0"
      label: start
  edges: []
"#;

#[test]
fn yaml_scheme_parses_and_validates() {
    let doc = Document::from_str_with(YAML, Format::Yaml).unwrap();
    assert_eq!(doc.source(), Some("mswb"));
    assert_eq!(doc.info().name, "魔术五笔");
    assert_eq!(doc.form().max_code_length, 2);
    assert_eq!(doc.form().code("木"), Some("m"));
    let analysis = doc.form().analysis().unwrap();
    assert_eq!(analysis.selector().unwrap().len(), 2);
    let degenerator = analysis.degenerator().unwrap();
    assert!(degenerator.no_cross());
    assert_eq!(degenerator.feature().unwrap().len(), 1);
    let glyph = doc.data().glyph("木").unwrap();
    assert_eq!(glyph.char(), Some('木'));
    assert_eq!(glyph.component.as_ref().unwrap().stroke_count(), 1);
    // absent sub-documents fall back to defaults
    assert!(doc.pronunciation().analysis().is_none());
}

#[test]
fn json_and_yaml_agree() {
    let doc = Document::from_str_with(YAML, Format::Yaml).unwrap();
    let json = doc.to_string_with(Format::Json).unwrap();
    let back = Document::from_str_with(&json, Format::Json).unwrap();
    assert_eq!(back, doc);
    let yaml = doc.to_string_with(Format::Yaml).unwrap();
    assert_eq!(Document::from_str_with(&yaml, Format::Yaml).unwrap(), doc);
}

#[test]
fn absent_analysis_is_not_serialized() {
    let json = Document::default().to_string_with(Format::Json).unwrap();
    assert!(!json.contains("analysis"));
    assert!(!json.contains("no_cross"));
    assert!(json.contains("\"mapping_type\": 1"));
}

#[test]
fn malformed_input_is_rejected_before_use() {
    let err = Document::from_str_with("{\"version\": 3}", Format::Json).unwrap_err();
    assert!(matches!(err, SchemeError::Serde(_)));

    let bad = YAML.replace("mapping_type: 2", "mapping_type: 0");
    let err = Document::from_str_with(&bad, Format::Yaml).unwrap_err();
    assert!(matches!(err, SchemeError::Validation(_)));
}

#[test]
fn format_follows_extension() {
    assert_eq!(
        Format::from_path(Path::new("a/b.JSON")).unwrap(),
        Format::Json
    );
    assert_eq!(Format::from_path(Path::new("x.yml")).unwrap(), Format::Yaml);
    assert!(Format::from_path(Path::new("x.toml")).is_err());
    assert!(Format::from_path(Path::new("noext")).is_err());
}

#[test]
fn save_then_load_from_disk() {
    let dir = PathBuf::from("target").join("unit_io");
    let path = dir.join("scheme.yaml");
    let _ = std::fs::remove_file(&path);

    let doc = Document::from_str_with(YAML, Format::Yaml).unwrap();
    doc.save(&path).unwrap();
    let back = Document::from_path(&path).unwrap();
    assert_eq!(back, doc);

    let missing = Document::from_path(dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, SchemeError::Io(_)));
}
