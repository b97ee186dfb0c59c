use std::fs;
use std::path::Path;

use renderc::parser::load_from_json;

#[test]
fn parses_template_entries() {
    let json = fs::read_to_string("tests/templates.json").unwrap();
    let entries = load_from_json(&json).expect("valid manifest");

    // sample manifest lists two templates
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    assert_eq!(first.class, "Greeting");
    assert_eq!(first.path, Path::new("greeting.tpl"));
}

#[test]
fn rejects_manifest_without_templates_array() {
    let err = load_from_json("{}").unwrap_err();
    assert!(err.to_string().contains("`templates` array"));
}
