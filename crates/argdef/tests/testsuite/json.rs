use argdef::Definition;
use argdef::ParseOptions;
use argdef::UsageOptions;
use argdef::ValidationError;

const DEFINITION: &str = r#"{
    "verbose": {"type": "boolean", "aliases": ["v"], "description": "More output"},
    "level": {"type": "number", "aliases": ["l", ""], "valid": [1, 2, 3], "default": 1},
    "tags": {"aliases": ["t"], "multiple": true},
    "pages": {"type": "range", "aliases": ["p"]},
    "help": {"type": "help", "aliases": ["h"]}
}"#;

#[test]
fn parse_through_json() {
    let definition = Definition::from_json_str(DEFINITION).unwrap();
    let options = ParseOptions::from_json_str(
        r#"{"argv": ["-vl", "2", "-t", "x", "-t", "y", "-p", "1-3", "file"]}"#,
    )
    .unwrap();
    let flags = argdef::parse(&definition, options).unwrap();
    assert_eq!(
        serde_json::to_value(&flags).unwrap(),
        serde_json::json!({
            "verbose": true,
            "v": true,
            "level": 2,
            "l": 2,
            "tags": ["x", "y"],
            "t": ["x", "y"],
            "pages": [1, 2, 3],
            "p": [1, 2, 3],
            "_": ["file"],
        })
    );
}

#[test]
fn empty_alias_has_no_long_form() {
    let definition = Definition::from_json_str(DEFINITION).unwrap();
    let text = argdef::usage(
        &definition,
        None,
        UsageOptions::from_json_str(r#"{"colors": false}"#).unwrap(),
    );
    assert!(text.contains("  -l, --level "), "{text}");
    assert!(!text.contains("--,"), "{text}");
    assert!(!text.ends_with("--"), "{text}");
}

#[test]
fn bad_definition_fails_before_parsing() {
    let err = Definition::from_json_str(r#"{"x": {"type": "number", "default": "one"}}"#)
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::DefaultType {
            option: "x".to_owned(),
            expected: "an integer",
        }
    );

    let err = Definition::from_json_str(r#"{"x": {"aliases": "y"}}"#).unwrap_err();
    assert!(matches!(err, ValidationError::Shape { what: "definition", .. }), "{err}");

    let err = Definition::from_json_str(r#"{"x": {"multiple": "yes"}}"#).unwrap_err();
    assert!(matches!(err, ValidationError::Shape { .. }), "{err}");

    let err = Definition::from_json_str(r#"{"x": {}, "y": {"aliases": ["x"]}}"#).unwrap_err();
    assert_eq!(err.to_string(), "`x` is declared more than once");
}

#[test]
fn option_objects_are_checked() {
    let err = ParseOptions::from_json_str(r#"{"argv": "-v"}"#).unwrap_err();
    assert!(matches!(err, ValidationError::Shape { what: "parse options", .. }));

    let err = UsageOptions::from_json_str(r#"{"colours": true}"#).unwrap_err();
    assert!(matches!(err, ValidationError::Shape { what: "usage options", .. }));
}
