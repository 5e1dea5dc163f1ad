//! File-backed parsers read from disk.

use std::io::Write;

use tempfile::NamedTempFile;
use xraydb_core::{PropertyKind, PropertyParser};
use xraydb_parsers::{CampbellRadiativeWidthParser, JsonDatasetParser, default_parsers};

#[test]
fn test_json_dataset_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "reference": {{"bibtexkey": "bearden1967", "year": "1967"}},
            "properties": [
                {{
                    "kind": "xray_transition_energy",
                    "element": 29,
                    "xray_transition": {{"source": [2, 1, 3], "destination": [1, 0, 1]}},
                    "value_ev": 8047.8
                }}
            ]
        }}"#
    )
    .unwrap();

    let parser = JsonDatasetParser::new(file.path());
    let props = parser.parse().unwrap();
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].kind(), PropertyKind::XrayTransitionEnergy);
    assert_eq!(props[0].reference.year.as_deref(), Some("1967"));
}

#[test]
fn test_campbell_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "29      1.55  3.80  0.57  0.58").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "79     10.5   9.00  4.00  3.66").unwrap();

    let parser = CampbellRadiativeWidthParser::new(file.path());
    let props = parser.parse().unwrap();
    assert_eq!(props.len(), 8);
    assert!(
        props
            .iter()
            .all(|p| p.kind() == PropertyKind::AtomicSubshellRadiativeWidth)
    );
}

#[test]
fn test_default_parsers_produce_unattributed_records() {
    for parser in default_parsers() {
        let props = parser.parse().unwrap();
        assert!(!props.is_empty(), "{} produced nothing", parser.name());
        assert!(
            props.iter().all(|p| p.reference.bibtexkey == "unattributed"),
            "{}",
            parser.name()
        );
    }
}
