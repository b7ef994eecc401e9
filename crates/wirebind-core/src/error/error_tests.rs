#![allow(non_snake_case)]

use super::*;

#[test]
fn GenerateError___config___displays_correctly() {
    let err = GenerateError::Config("indent must be at most 16, got 40".into());

    let display = err.to_string();

    assert_eq!(display, "configuration error: indent must be at most 16, got 40");
}

#[test]
fn GenerateError___strict___counts_diagnostics() {
    let err = GenerateError::Strict {
        diagnostics: vec![
            Diagnostic::DuplicateTypeName { name: "A".into() },
            Diagnostic::DuplicateTypeName { name: "B".into() },
        ],
    };

    assert_eq!(err.to_string(), "generation recorded 2 diagnostic(s) in strict mode");
    assert_eq!(err.diagnostics().len(), 2);
}

#[test]
fn GenerateError___non_strict___has_no_diagnostics() {
    let err = GenerateError::Template("unknown slot".into());

    assert!(err.diagnostics().is_empty());
}

#[test]
fn GenerateError___from_serde_error___converts_to_schema_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: GenerateError = json_err.into();

    assert!(matches!(err, GenerateError::Schema(_)));
}

#[test]
fn GenerateError___from_toml_error___converts_to_schema_error() {
    let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();

    let err: GenerateError = toml_err.into();

    assert!(matches!(err, GenerateError::Schema(_)));
}
