//! Integration tests: `default` literals.

use std::path::PathBuf;

use yamltags::{process, TagError, Tagged, ValueKind};

#[derive(Tagged, Debug, Default, Clone, PartialEq)]
struct DefaultTags {
    #[yamltags(default = "foo")]
    a: String,
    #[yamltags(default = 3)]
    b: i32,
}

#[test]
fn test_missing_all() {
    let mut s = DefaultTags::default();
    process(&mut s).unwrap();
    assert_eq!(
        s,
        DefaultTags {
            a: "foo".to_string(),
            b: 3
        }
    );
}

#[test]
fn test_all_set() {
    let mut s = DefaultTags {
        a: "yo".to_string(),
        b: 1,
    };
    process(&mut s).unwrap();
    assert_eq!(
        s,
        DefaultTags {
            a: "yo".to_string(),
            b: 1
        }
    );
}

#[test]
fn test_some_set() {
    let mut s = DefaultTags {
        a: "yo".to_string(),
        ..Default::default()
    };
    process(&mut s).unwrap();
    assert_eq!(
        s,
        DefaultTags {
            a: "yo".to_string(),
            b: 3
        }
    );
}

#[test]
fn test_second_pass_is_a_no_op() {
    let mut s = DefaultTags::default();
    process(&mut s).unwrap();
    let once = s.clone();
    process(&mut s).unwrap();
    assert_eq!(s, once);
}

#[derive(Tagged, Debug, Default, PartialEq)]
struct Primitives {
    #[yamltags(default = true)]
    push: bool,
    #[yamltags(default = "0.25")]
    ratio: f32,
    #[yamltags(default = -1)]
    offset: i64,
    #[yamltags(default = 1.5)]
    scale: f64,
    #[yamltags(default = 'x')]
    sep: char,
    #[yamltags(default = "Dockerfile")]
    dockerfile: PathBuf,
    #[yamltags(default = 8080)]
    port: Option<u16>,
}

#[test]
fn test_defaults_parse_per_type() {
    let mut s = Primitives::default();
    process(&mut s).unwrap();
    assert_eq!(
        s,
        Primitives {
            push: true,
            ratio: 0.25,
            offset: -1,
            scale: 1.5,
            sep: 'x',
            dockerfile: PathBuf::from("Dockerfile"),
            port: Some(8080),
        }
    );
}

#[test]
fn test_false_is_zero_so_bool_default_true_always_wins() {
    let mut s = Primitives {
        push: false,
        ..Default::default()
    };
    process(&mut s).unwrap();
    assert!(s.push);
}

#[test]
fn test_present_option_is_not_refilled() {
    let mut s = Primitives {
        port: Some(0),
        ..Default::default()
    };
    process(&mut s).unwrap();
    assert_eq!(s.port, Some(0));
}

#[derive(Tagged, Debug, Default)]
struct BadLiteral {
    #[yamltags(default = "abc")]
    count: u32,
}

#[test]
fn test_unparsable_literal_is_invalid_default() {
    let err = process(&mut BadLiteral::default()).unwrap_err();
    match err {
        TagError::InvalidDefault {
            field, literal, ..
        } => {
            assert_eq!(field, "BadLiteral.count");
            assert_eq!(literal, "abc");
        }
        other => panic!("Expected InvalidDefault, got: {other}"),
    }
}

#[derive(Tagged, Debug, Default)]
struct OutOfRange {
    #[yamltags(default = 300)]
    small: u8,
}

#[test]
fn test_out_of_range_literal_is_invalid_default() {
    assert!(matches!(
        process(&mut OutOfRange::default()),
        Err(TagError::InvalidDefault { .. })
    ));
}

#[derive(Tagged, Debug, Default)]
struct ListDefault {
    #[yamltags(default = "a")]
    items: Vec<String>,
}

#[test]
fn test_default_on_sequence_is_unsupported() {
    let err = process(&mut ListDefault::default()).unwrap_err();
    assert_eq!(
        err,
        TagError::UnsupportedDefault {
            field: "ListDefault.items".to_string(),
            kind: ValueKind::Sequence,
        }
    );
}

#[test]
fn test_default_on_non_empty_sequence_never_runs() {
    let mut s = ListDefault {
        items: vec!["x".to_string()],
    };
    process(&mut s).unwrap();
    assert_eq!(s.items, vec!["x".to_string()]);
}

#[derive(Tagged, Debug, Default)]
struct RequiredAndDefault {
    #[yamltags(required, default = "x")]
    name: String,
}

#[test]
fn test_required_fires_before_default() {
    let mut s = RequiredAndDefault::default();
    assert!(matches!(
        process(&mut s),
        Err(TagError::MissingRequiredField { .. })
    ));
    assert!(s.name.is_empty());
}

#[derive(Tagged, Debug, Default)]
struct Padded {
    #[yamltags(default = "  indent ")]
    prefix: String,
    #[yamltags(required, default = " x")]
    marker: String,
}

#[test]
fn test_default_literal_whitespace_is_kept() {
    let mut s = Padded {
        marker: "m".to_string(),
        ..Default::default()
    };
    process(&mut s).unwrap();
    assert_eq!(s.prefix, "  indent ");
    assert_eq!(s.marker, "m");
}

#[derive(Tagged, Debug, Default)]
struct BoxedDefaults {
    #[yamltags(default = 5)]
    count: Option<Box<u32>>,
    #[yamltags(default = "web")]
    name: Box<String>,
}

#[test]
fn test_default_through_optional_box() {
    let mut s = BoxedDefaults::default();
    process(&mut s).unwrap();
    assert_eq!(s.count.as_deref(), Some(&5));
    assert_eq!(s.name.as_str(), "web");
}

#[test]
fn test_present_optional_box_is_not_refilled() {
    let mut s = BoxedDefaults {
        count: Some(Box::new(0)),
        ..Default::default()
    };
    process(&mut s).unwrap();
    assert_eq!(s.count.as_deref(), Some(&0));
}
