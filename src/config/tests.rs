// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::collections::HashMap;

use time::OffsetDateTime;
use time::macros::datetime;

use crate::ast::{Assignments, Group, Node, Pair};
use crate::transform::TransformOptions;

// title = "TestApp"
// debug = true
//
// [server]
// host = "localhost"
// port = 8080
// max-connections = 128
//
// [server.tls]
// enabled = false
//
// [app]
// features = ["auth", "logging"]
// theme = "rounded"
// released = 1979-05-27T07:32:00Z
// ratio = 2
fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::Assignments(Assignments::pairs([
            Pair::new("title", Node::string("TestApp"), 1, 1),
            Pair::new("debug", Node::boolean("true"), 2, 1),
        ])),
        Entry::Group(Group::new(
            ["server"],
            Assignments::pairs([
                Pair::new("host", Node::string("localhost"), 5, 1),
                Pair::new("port", Node::integer("8080"), 6, 1),
                Pair::new("max-connections", Node::integer("128"), 7, 1),
            ]),
            4,
            2,
        )),
        Entry::Group(Group::new(
            ["server", "tls"],
            Assignments::pairs([Pair::new("enabled", Node::boolean("false"), 10, 1)]),
            9,
            2,
        )),
        Entry::Group(Group::new(
            ["app"],
            Assignments::pairs([
                Pair::new(
                    "features",
                    Node::array([Node::string("auth"), Node::string("logging")]),
                    13,
                    1,
                ),
                Pair::new("theme", Node::string("rounded"), 14, 1),
                Pair::new("released", Node::datetime("1979-05-27T07:32:00Z"), 15, 1),
                Pair::new("ratio", Node::integer("2"), 16, 1),
            ]),
            12,
            2,
        )),
    ]
}

fn sample() -> TomlConfig {
    TomlConfig::from_entries(&sample_entries()).expect("Failed to transform config")
}

#[test]
fn test_config_typed_access() {
    let config = sample();

    let title: String = config.get("title").expect("Failed to get title");
    assert_eq!(title, "TestApp");

    let host: String = config.get("server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = config.get("debug").expect("Failed to get debug");
    assert!(debug);

    let tls: bool = config.get("server.tls.enabled").expect("Failed to get tls");
    assert!(!tls);

    let features: Vec<String> = config.get("app.features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);

    let released: OffsetDateTime = config.get("app.released").expect("Failed to get released");
    assert_eq!(released, datetime!(1979-05-27 07:32:00 UTC));

    let ratio: f64 = config.get("app.ratio").expect("Failed to widen integer");
    assert_eq!(ratio, 2.0);
}

#[test]
fn test_snake_and_kebab_lookup() {
    let config = sample();

    let exact: u32 = config.get("server.max-connections").unwrap();
    let snake: u32 = config.get("server.max_connections").unwrap();
    assert_eq!(exact, 128);
    assert_eq!(snake, 128);
    assert!(config.has("server.max_connections"));
}

#[test]
fn test_missing_and_optional() {
    let config = sample();

    assert!(!config.has("server.nonexistent"));
    assert!(matches!(
        config.get::<String>("server.nonexistent"),
        Err(AccessError::MissingKey { code: Some(304), .. })
    ));

    let none: Option<String> = config.get_optional("server.nonexistent").unwrap();
    assert_eq!(none, None);

    let timeout = config.get_or("server.timeout", 30u64);
    assert_eq!(timeout, 30);
}

#[test]
fn test_type_error_points_at_declaration() {
    let config = sample();

    let err = config.get::<u16>("server.host").unwrap_err();
    match err {
        AccessError::TypeError { line, column, code, .. } => {
            assert_eq!((line, column), (5, 1));
            assert_eq!(code, Some(402));
        }
        other => panic!("Expected a type error, got {:?}", other),
    }

    let err = config.get::<bool>("title").unwrap_err();
    assert!(err.to_string().contains("line 1 column 1"), "{}", err);
}

#[test]
fn test_out_of_range_integer() {
    let entries = vec![Entry::Assignments(Assignments::pairs([Pair::new(
        "port",
        Node::integer("70000"),
        3,
        1,
    )]))];
    let config = TomlConfig::from_entries(&entries).unwrap();

    let err = config.get::<u16>("port").unwrap_err();
    assert!(matches!(err, AccessError::TypeError { line: 3, code: Some(403), .. }));
    assert_eq!(config.get::<u32>("port").unwrap(), 70000);
}

#[test]
fn test_integer_widening_stays_exact() {
    let entries = vec![Entry::Assignments(Assignments::pairs([
        Pair::new("edge", Node::integer("-9007199254740992"), 1, 1),
        Pair::new("big", Node::integer("9007199254740993"), 2, 1),
    ]))];
    let config = TomlConfig::from_entries(&entries).unwrap();

    assert_eq!(config.get::<f64>("edge").unwrap(), -9007199254740992.0);

    let err = config.get::<f64>("big").unwrap_err();
    assert!(matches!(err, AccessError::TypeError { line: 2, code: Some(413), .. }));
    assert_eq!(config.get::<i64>("big").unwrap(), 9007199254740993);
}

#[test]
fn test_get_keys_in_order() {
    let config = sample();

    let keys = config.get_keys("server").expect("Failed to get server keys");
    assert_eq!(keys, ["host", "port", "max-connections", "tls"]);

    let root = config.get_keys("").expect("Failed to get root keys");
    assert_eq!(root, ["title", "debug", "server", "app"]);

    assert!(config.get_keys("server.port").is_err());
}

#[test]
fn test_positions_are_recorded() {
    let config = sample();

    assert_eq!(config.position("server"), Some(Position::new(4, 2)));
    assert_eq!(config.position("server.tls"), Some(Position::new(9, 2)));
    assert_eq!(config.position("server.tls.enabled"), Some(Position::new(10, 1)));
    assert_eq!(config.position("debug"), Some(Position::new(2, 1)));
    assert_eq!(config.position("nope"), None);
}

#[test]
fn test_table_conversions() {
    let config = sample();

    let tls: HashMap<String, Value> = config.get("server.tls").unwrap();
    assert_eq!(tls.get("enabled"), Some(&Value::Boolean(false)));

    let app: Table = config.get("app").unwrap();
    assert_eq!(app.len(), 4);

    assert!(config.get::<HashMap<String, String>>("server").is_err());
}

#[test]
fn test_string_enum_validation() {
    let config = sample();

    let theme = config.get_string_enum("app.theme", &["plain", "Rounded", "thick"]);
    assert_eq!(theme.unwrap(), "rounded");

    let err = config.get_string_enum("app.theme", &["plain", "thick"]).unwrap_err();
    match err {
        AccessError::ValidationError { line, code, .. } => {
            assert_eq!(line, 14);
            assert_eq!(code, Some(451));
        }
        other => panic!("Expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_get_validated() {
    let config = sample();

    let port: u16 = config
        .get_validated("server.port", |p: &u16| *p >= 1024, ">= 1024")
        .expect("port should validate");
    assert_eq!(port, 8080);

    let err = config
        .get_validated("server.port", |p: &u16| *p < 1024, "< 1024")
        .unwrap_err();
    assert!(matches!(err, AccessError::ValidationError { line: 6, code: Some(450), .. }));
}

#[test]
fn test_transform_errors_surface_from_config() {
    let entries = vec![
        Entry::Group(Group::new(["a"], Assignments::Empty, 1, 2)),
        Entry::Group(Group::new(["a"], Assignments::Empty, 2, 2)),
    ];

    let err = TomlConfig::from_entries(&entries).unwrap_err();
    assert_eq!(err.kind(), crate::ErrorKind::DuplicateKey);
    assert_eq!(err.position(), Position::new(2, 2));
}

#[test]
fn test_lenient_options_are_honored() {
    let entries = vec![Entry::Assignments(Assignments::pairs([Pair::new(
        "path",
        Node::string(r"C:\qux"),
        1,
        1,
    )]))];

    assert!(TomlConfig::from_entries(&entries).is_err());

    let lenient = Transform::with_options(TransformOptions::lenient());
    let config = TomlConfig::from_entries_with(&lenient, &entries).unwrap();
    assert_eq!(config.get::<String>("path").unwrap(), r"C:\qux");
}

#[test]
fn test_from_table() {
    let mut root = Table::new();
    root.insert("name".into(), Value::from("direct"));
    let config = TomlConfig::from(root);

    assert_eq!(config.get::<String>("name").unwrap(), "direct");
    assert_eq!(config.position("name"), None);
    assert_eq!(config.into_table().len(), 1);
}
