//! Incremental synchronization tests
//!
//! Re-running over an unchanged tree must not touch any artifact; a source
//! change rewrites exactly the artifacts whose content changed.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use reflgen::features::artifact_sync::SyncOutcome;

const REGISTRY: &str = "src/generated/registry.gen.h";

fn two_header_project() -> TestProject {
    let project = TestProject::new();
    project
        .write(
            "src/widget.h",
            "#pragma once
// health is clamped by the owner
class Widget {
MARK_CLASS()
MARK_PROPERTY()
int health;
float speed;
};
",
        )
        .write("src/panel.h", &fixture_reflected_struct("Panel", "width"))
        .write("src/main.cpp", &fixture_main(&["widget.h", "panel.h"]));
    project
}

#[test]
fn test_second_run_writes_nothing() {
    let project = two_header_project();
    let first = project.run(&["src/main.cpp"]);
    assert_eq!(first.artifacts_written.len(), 2);

    let widget_before = project.read("src/generated/widget.gen.h");
    let widget_mtime = project.modified("src/generated/widget.gen.h");
    let registry_mtime = project.modified(REGISTRY);

    let second = project.run(&["src/main.cpp"]);

    assert!(second.is_noop());
    assert_eq!(second.artifacts_unchanged, 2);
    assert_eq!(second.registry, Some(SyncOutcome::Unchanged));
    assert_eq!(project.read("src/generated/widget.gen.h"), widget_before);
    assert_eq!(project.modified("src/generated/widget.gen.h"), widget_mtime);
    assert_eq!(project.modified(REGISTRY), registry_mtime);
}

#[test]
fn test_comment_edit_rewrites_nothing() {
    let project = two_header_project();
    project.run(&["src/main.cpp"]);

    let source = project.read("src/widget.h");
    project.write(
        "src/widget.h",
        &source.replace("health is clamped by the owner", "owner clamps health"),
    );
    let summary = project.run(&["src/main.cpp"]);

    assert!(summary.is_noop());
}

#[test]
fn test_new_property_rewrites_only_owning_artifact() {
    let project = two_header_project();
    project.run(&["src/main.cpp"]);

    let source = project.read("src/widget.h");
    project.write(
        "src/widget.h",
        &source.replace("float speed;", "MARK_PROPERTY()\nfloat speed;"),
    );
    let summary = project.run(&["src/main.cpp"]);

    assert_eq!(
        summary.artifacts_written,
        vec![project.path("src/generated/widget.gen.h")]
    );
    assert_eq!(summary.registry, Some(SyncOutcome::Unchanged));

    let artifact = project.read("src/generated/widget.gen.h");
    assert_in_order(
        &artifact,
        &["offsetof(Widget, health)", "offsetof(Widget, speed)"],
    );
}

#[test]
fn test_removed_class_marker_empties_artifact() {
    let project = two_header_project();
    project.run(&["src/main.cpp"]);

    let source = project.read("src/panel.h");
    project.write("src/panel.h", &source.replace("MARK_CLASS()\n", ""));
    let summary = project.run(&["src/main.cpp"]);

    assert_eq!(
        summary.artifacts_written,
        vec![project.path("src/generated/panel.gen.h")]
    );
    assert_eq!(summary.registry, Some(SyncOutcome::Written));
    assert!(!project.read("src/generated/panel.gen.h").contains("#define"));
    assert_registered(&project.read(REGISTRY), &["Widget"]);

    let third = project.run(&["src/main.cpp"]);
    assert!(third.is_noop());
}

#[test]
fn test_generated_headers_are_not_rescanned() {
    let project = two_header_project();
    // headers that include their own artifact, as engine code does
    let source = project.read("src/widget.h");
    project.write(
        "src/widget.h",
        &source.replace("#pragma once\n", "#pragma once\n#include \"generated/widget.gen.h\"\n"),
    );

    let first = project.run(&["src/main.cpp"]);
    let second = project.run(&["src/main.cpp"]);

    assert_eq!(first.registered_types, second.registered_types);
    assert_eq!(second.files_processed, 2);
    assert!(second.is_noop());
}
