// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use cdncfg::domain::{Entry, Node, Section};

/// Installs a test-writer subscriber so `tracing` output shows up with `--nocapture`.
///
/// Safe to call from every test; only the first call installs the subscriber.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Builds the sample document used across the integration tests:
///
/// ```text
/// name: "MyApp"
/// database:
///   host: localhost
///   port: 5432
///   replicas: [db1, db2]
/// features: [auth, "cache", metrics]
/// debug: false
/// ```
#[allow(dead_code)]
pub fn sample_document() -> Section {
    let mut root = Section::new("");
    root.append(Entry::new("name", "\"MyApp\"").with_description(["# application name"]));
    root.append(Section::new("database").with_children([
        Node::from(Entry::new("host", "localhost")),
        Node::from(Entry::new("port", "5432")),
        Node::from(
            Section::new_array("replicas")
                .with_children([Entry::new("0", "db1"), Entry::new("1", "db2")]),
        ),
    ]));
    root.append(Section::new_array("features").with_children([
        Entry::new("0", "auth"),
        Entry::new("1", "\"cache\""),
        Entry::new("2", "metrics"),
    ]));
    root.append(Entry::new("debug", "false"));
    root
}
