// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for binding host objects to documents.
//!
//! Each test owns a plain struct, builds field adapters over its fields and moves
//! values through the `SectionBinder`.

mod common;

use cdncfg::adapters::{ListField, NestedField, ScalarField};
use cdncfg::domain::{CdnError, Element, Entry, NamedElement, Section};
use cdncfg::ports::{AnnotatedMember, Annotation};
use cdncfg::service::SectionBinder;

#[derive(Debug)]
struct Database {
    host: String,
    port: u16,
    replicas: Vec<String>,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            replicas: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct AppConfig {
    name: String,
    debug: bool,
    features: Vec<String>,
    database: Database,
    secret: String,
}

impl AppConfig {
    fn members(&mut self) -> Vec<Box<dyn AnnotatedMember + '_>> {
        vec![
            Box::new(
                ScalarField::new("AppConfig", "name", &mut self.name)
                    .annotate(Annotation::Description("# application name".into())),
            ),
            Box::new(ScalarField::new("AppConfig", "debug", &mut self.debug)),
            Box::new(ListField::new("AppConfig", "features", &mut self.features)),
            Box::new(
                NestedField::new(
                    "AppConfig",
                    "database",
                    vec![
                        Box::new(ScalarField::new("Database", "host", &mut self.database.host)),
                        Box::new(ScalarField::new("Database", "port", &mut self.database.port)),
                        Box::new(ListField::new(
                            "Database",
                            "replicas",
                            &mut self.database.replicas,
                        )),
                    ],
                )
                .with_type_name("Database"),
            ),
            Box::new(
                ScalarField::new("AppConfig", "secret", &mut self.secret)
                    .annotate(Annotation::Exclude),
            ),
        ]
    }
}

#[test]
fn test_load_sample_document() {
    common::init_tracing();
    let root = common::sample_document();

    let mut config = AppConfig {
        secret: "keep".into(),
        ..Default::default()
    };
    SectionBinder::new()
        .load(&root, &mut config.members())
        .unwrap();

    assert_eq!(config.name, "MyApp");
    assert!(!config.debug);
    assert_eq!(config.features, vec!["auth", "cache", "metrics"]);
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.replicas, vec!["db1", "db2"]);
    assert_eq!(config.secret, "keep");
}

#[test]
fn test_missing_key_keeps_default() {
    struct CustomModifier {
        motd: String,
    }

    let root = Section::new("").with_children([Entry::new("other", "value")]);
    let mut modifier = CustomModifier {
        motd: "siema".to_string(),
    };
    {
        let mut members: Vec<Box<dyn AnnotatedMember + '_>> = vec![Box::new(
            ScalarField::new("CustomModifier", "motd", &mut modifier.motd),
        )];
        SectionBinder::new().load(&root, &mut members).unwrap();
    }
    assert_eq!(modifier.motd, "siema");
}

#[test]
fn test_strict_binder_reports_missing_key() {
    let root = Section::new("");
    let mut motd = String::from("siema");
    let mut members: Vec<Box<dyn AnnotatedMember + '_>> =
        vec![Box::new(ScalarField::new("CustomModifier", "motd", &mut motd))];

    let binder = SectionBinder::builder().with_strict(true).build();
    let err = binder.load(&root, &mut members).unwrap_err();
    assert!(matches!(err, CdnError::MissingKey { ref key } if key == "motd"));
}

#[test]
fn test_name_annotation_selects_dotted_key() {
    let root = common::sample_document();
    let mut port: i64 = 0;
    {
        let mut members: Vec<Box<dyn AnnotatedMember + '_>> = vec![Box::new(
            ScalarField::new("Flat", "port", &mut port)
                .annotate(Annotation::Name("database.port".into())),
        )];
        SectionBinder::new().load(&root, &mut members).unwrap();
    }
    assert_eq!(port, 5432);
}

#[test]
fn test_malformed_value_is_invocation_error() {
    let root = Section::new("").with_children([Entry::new("port", "not-a-number")]);
    let mut port: u16 = 1;
    let mut members: Vec<Box<dyn AnnotatedMember + '_>> =
        vec![Box::new(ScalarField::new("Server", "port", &mut port))];

    let err = SectionBinder::new().load(&root, &mut members).unwrap_err();
    match err {
        CdnError::MemberInvocation {
            member, instance, ..
        } => {
            assert_eq!(member, "port");
            assert_eq!(instance, "Server");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_wrong_kind_in_document_is_mismatch() {
    let root = common::sample_document();
    let mut database = String::new();
    let mut members: Vec<Box<dyn AnnotatedMember + '_>> =
        vec![Box::new(ScalarField::new("Flat", "database", &mut database))];

    let err = SectionBinder::new().load(&root, &mut members).unwrap_err();
    assert!(err.is_kind_mismatch());
}

#[test]
fn test_save_builds_document() {
    let mut config = AppConfig {
        name: "MyApp".into(),
        debug: true,
        features: vec!["auth".into(), "cache".into()],
        database: Database {
            host: "db.local".into(),
            port: 5432,
            replicas: vec!["r1".into()],
        },
        secret: "hidden".into(),
    };

    let root = SectionBinder::new().save("", &config.members()).unwrap();

    assert_eq!(root.len(), 4);
    assert!(!root.has("secret"));
    assert_eq!(root.get_string("name").unwrap(), Some("MyApp".into()));
    assert_eq!(
        root.get_entry("name").unwrap().unwrap().description(),
        &["# application name".to_string()]
    );
    assert_eq!(root.get_bool("debug").unwrap(), Some(true));

    let features = root.get_section("features").unwrap().unwrap();
    assert!(features.is_array_shaped());
    assert_eq!(features.get_at(1).map(|n| n.name()), Some("1"));
    assert_eq!(
        root.get_list("features").unwrap(),
        Some(vec!["auth".into(), "cache".into()])
    );

    assert_eq!(root.get_string("database.host").unwrap(), Some("db.local".into()));
    assert_eq!(root.get_int("database.port").unwrap(), Some(5432));
    assert_eq!(root.get_list("database.replicas").unwrap(), Some(vec!["r1".into()]));
}

#[test]
fn test_save_without_descriptions() {
    let mut name = String::from("MyApp");
    let members: Vec<Box<dyn AnnotatedMember + '_>> = vec![Box::new(
        ScalarField::new("AppConfig", "name", &mut name)
            .annotate(Annotation::Description("# dropped".into())),
    )];

    let binder = SectionBinder::builder().with_descriptions(false).build();
    let root = binder.save("root", &members).unwrap();

    assert_eq!(root.name(), "root");
    assert!(root.get_entry("name").unwrap().unwrap().description().is_empty());
}

#[test]
fn test_save_dotted_keys_share_parent() {
    let mut host = String::from("localhost");
    let mut port: u16 = 8080;
    let members: Vec<Box<dyn AnnotatedMember + '_>> = vec![
        Box::new(
            ScalarField::new("Flat", "host", &mut host)
                .annotate(Annotation::Name("server.http.host".into())),
        ),
        Box::new(
            ScalarField::new("Flat", "port", &mut port)
                .annotate(Annotation::Name("server.http.port".into())),
        ),
    ];

    let root = SectionBinder::new().save("", &members).unwrap();
    assert_eq!(root.len(), 1);
    let http = root.get_section("server.http").unwrap().unwrap();
    assert_eq!(http.len(), 2);
    assert_eq!(root.get_int("server.http.port").unwrap(), Some(8080));
}

#[test]
fn test_save_then_load_roundtrip() {
    let mut source = AppConfig {
        name: "MyApp".into(),
        debug: true,
        features: vec!["a".into(), "b".into()],
        database: Database {
            host: "db".into(),
            port: 1,
            replicas: vec!["x".into(), "y".into()],
        },
        secret: "s".into(),
    };
    let root = SectionBinder::new().save("", &source.members()).unwrap();

    let mut target = AppConfig::default();
    SectionBinder::new()
        .load(&root, &mut target.members())
        .unwrap();

    assert_eq!(target.name, source.name);
    assert_eq!(target.debug, source.debug);
    assert_eq!(target.features, source.features);
    assert_eq!(target.database.host, source.database.host);
    assert_eq!(target.database.port, source.database.port);
    assert_eq!(target.database.replicas, source.database.replicas);
    assert_eq!(target.secret, "");
}

#[test]
fn test_strict_binder_reaches_nested_members() {
    let root = Section::new("")
        .with_children([Section::new("database").with_children([Entry::new("port", "5432")])]);
    let mut host = String::from("keep");
    let mut port: u16 = 0;
    let err = {
        let mut members: Vec<Box<dyn AnnotatedMember + '_>> = vec![Box::new(NestedField::new(
            "AppConfig",
            "database",
            vec![
                Box::new(ScalarField::new("Database", "port", &mut port)),
                Box::new(ScalarField::new("Database", "host", &mut host)),
            ],
        ))];
        SectionBinder::builder()
            .with_strict(true)
            .build()
            .load(&root, &mut members)
            .unwrap_err()
    };

    assert!(matches!(err, CdnError::MissingKey { ref key } if key == "host"));
    assert_eq!(port, 5432);
    assert_eq!(host, "keep");
}

#[test]
fn test_lenient_binder_keeps_nested_defaults() {
    let root = Section::new("")
        .with_children([Section::new("database").with_children([Entry::new("port", "5432")])]);
    let mut config = AppConfig::default();
    SectionBinder::new()
        .load(&root, &mut config.members())
        .unwrap();

    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.host, "127.0.0.1");
}

#[test]
fn test_save_settings_reach_nested_members() {
    let mut host = String::from("db.local");
    let members: Vec<Box<dyn AnnotatedMember + '_>> = vec![Box::new(NestedField::new(
        "AppConfig",
        "database",
        vec![Box::new(
            ScalarField::new("Database", "host", &mut host)
                .annotate(Annotation::Description("# database host".into())),
        )],
    ))];

    let quiet = SectionBinder::builder().with_descriptions(false).build();
    let root = quiet.save("", &members).unwrap();
    let entry = root.get_entry("database.host").unwrap().unwrap();
    assert_eq!(entry.unit_value(), "db.local");
    assert!(entry.description().is_empty());

    let root = SectionBinder::new().save("", &members).unwrap();
    let entry = root.get_entry("database.host").unwrap().unwrap();
    assert_eq!(entry.description(), &["# database host".to_string()]);
}
