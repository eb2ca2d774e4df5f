//! End-to-end generation tests
//!
//! Real headers on disk, parsed with the tree-sitter front end and written
//! through the filesystem store.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use reflgen::features::artifact_sync::SyncOutcome;
use reflgen::{ErrorKind, GeneratorConfig};

const REGISTRY: &str = "src/generated/registry.gen.h";

#[test]
fn test_widget_round_trip() {
    let project = TestProject::new();
    project
        .write("src/widget.h", WIDGET_HEADER)
        .write("src/main.cpp", &fixture_main(&["widget.h"]));

    let summary = project.run(&["src/main.cpp"]);

    assert_eq!(summary.classes_reflected, 1);
    assert_eq!(summary.registered_types, vec!["Widget".to_string()]);
    assert_eq!(summary.registry, Some(SyncOutcome::Written));

    let expected = r#"// Generated by reflgen from widget.h. Do not edit.
#pragma once

#include <cstddef>

#define __DEF_CLASS_HELPER_L_2() \
    static const AClassData& GetClassDataStatic() \
    { \
        static const AClassData classData = []() \
        { \
            AClassData data; \
            data.Name = "Widget"; \
            data.Size = sizeof(Widget); \
            data.Properties.push_back({ AName("health"), AName("int"), offsetof(Widget, health) }); \
            return data; \
        }(); \
        return classData; \
    } \
     \
    virtual const AClassData& GetClassData() const override \
    { \
        return GetClassDataStatic(); \
    }
"#;
    assert_eq!(project.read("src/generated/widget.gen.h"), expected);
    assert_registered(&project.read(REGISTRY), &["Widget"]);
}

#[test]
fn test_name_mismatch_emits_no_block() {
    let project = TestProject::new();
    project.write(
        "src/gadget.h",
        "class Widget;
MARK_CLASS()
struct Gadget {
MARK_PROPERTY()
int x;
};
",
    );

    let summary = project.run(&["src/gadget.h"]);

    assert_eq!(summary.classes_reflected, 0);
    assert!(!project.exists("src/generated/gadget.gen.h"));
    assert_registered(&project.read(REGISTRY), &[]);
}

#[test]
fn test_property_marker_on_method_is_tolerated() {
    let project = TestProject::new();
    project.write(
        "src/actor.h",
        "class Actor {
MARK_CLASS()
public:
MARK_PROPERTY()
void Tick();
MARK_PROPERTY()
int hp;
};
",
    );

    let summary = project.run(&["src/actor.h"]);
    assert_eq!(summary.classes_reflected, 1);

    let artifact = project.read("src/generated/actor.gen.h");
    assert_has_helper(&artifact, 2);
    assert!(artifact.contains("offsetof(Actor, hp)"));
    assert!(!artifact.contains("Tick"));
}

#[test]
fn test_property_order_follows_declarations() {
    let project = TestProject::new();
    project.write(
        "src/stats.h",
        "struct Stats {
MARK_CLASS()
MARK_PROPERTY()
int strength;
int unmarked;
MARK_PROPERTY()
float agility;
bool flag;
MARK_PROPERTY()
double luck;
};
",
    );

    project.run(&["src/stats.h"]);

    let artifact = project.read("src/generated/stats.gen.h");
    assert_in_order(
        &artifact,
        &["offsetof(Stats, strength)", "offsetof(Stats, agility)", "offsetof(Stats, luck)"],
    );
    assert!(!artifact.contains("unmarked"));
    assert!(!artifact.contains("flag"));
}

#[test]
fn test_orphan_on_static_member_does_not_hide_next_class() {
    let project = TestProject::new();
    project.write(
        "src/counters.h",
        "struct A {
MARK_CLASS()
MARK_PROPERTY()
static int count;
};
struct B {
MARK_CLASS()
MARK_PROPERTY()
int y;
};
",
    );

    let summary = project.run(&["src/counters.h"]);

    assert_eq!(summary.registered_types, vec!["A".to_string(), "B".to_string()]);
    let artifact = project.read("src/generated/counters.gen.h");
    assert_in_order(&artifact, &["__DEF_CLASS_HELPER_L_2()", "__DEF_CLASS_HELPER_L_7()"]);
    assert!(artifact.contains("offsetof(B, y)"));
    assert!(!artifact.contains("AName(\"count\")"));
}

#[test]
fn test_header_continues_after_mid_file_include() {
    let project = TestProject::new();
    project
        .write(
            "src/a.h",
            "#pragma once
struct First {
MARK_CLASS()
MARK_PROPERTY()
int x;
};
#include \"b.h\"
struct Late {
MARK_CLASS()
MARK_PROPERTY()
int z;
};
",
        )
        .write("src/b.h", &fixture_reflected_struct("Bee", "y"));

    let summary = project.run(&["src/a.h"]);

    assert_eq!(
        summary.registered_types,
        vec!["First".to_string(), "Bee".to_string(), "Late".to_string()]
    );
    let artifact = project.read("src/generated/a.gen.h");
    assert_in_order(&artifact, &["__DEF_CLASS_HELPER_L_3()", "__DEF_CLASS_HELPER_L_9()"]);
    assert!(artifact.contains("offsetof(Late, z)"));
    assert_has_helper(&project.read("src/generated/b.gen.h"), 3);
    assert_registered(&project.read(REGISTRY), &["First", "Bee", "Late"]);
}

#[test]
fn test_registry_follows_discovery_order() {
    let project = TestProject::new();
    project
        .write("src/a.h", &fixture_reflected_struct("Foo", "x"))
        .write("src/b.h", &fixture_reflected_struct("Bar", "y"))
        .write("src/c.h", &fixture_reflected_struct("Baz", "z"))
        .write("src/main.cpp", &fixture_main(&["a.h", "b.h", "c.h"]));

    let summary = project.run(&["src/main.cpp"]);

    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.artifacts_written.len(), 3);
    assert_registered(&project.read(REGISTRY), &["Foo", "Bar", "Baz"]);
    for header in ["a", "b", "c"] {
        assert_has_helper(&project.read(&format!("src/generated/{header}.gen.h")), 3);
    }
}

#[test]
fn test_namespaced_types_are_registered_qualified() {
    let project = TestProject::new();
    project.write(
        "src/game/world.h",
        "#pragma once
namespace game {
namespace detail {
struct Transform {
MARK_CLASS()
MARK_PROPERTY()
float x;
};
}
class Entity {
MARK_CLASS()
public:
MARK_PROPERTY()
detail::Transform transform;
MARK_PROPERTY()
const char* name;
};
}
",
    );

    project.run(&["src/game/world.h"]);

    let artifact = project.read("src/game/generated/world.gen.h");
    assert_in_order(&artifact, &["__DEF_CLASS_HELPER_L_5()", "__DEF_CLASS_HELPER_L_11()"]);
    assert!(artifact.contains("data.Size = sizeof(Entity);"));
    assert!(artifact.contains("AName(\"transform\"), AName(\"detail::Transform\")"));
    assert!(artifact.contains("AName(\"name\"), AName(\"const char *\")"));
    assert_registered(&project.read(REGISTRY), &["game::detail::Transform", "game::Entity"]);
}

#[test]
fn test_headers_outside_source_root_are_ignored() {
    let project = TestProject::new();
    project
        .write("third_party/lib.h", &fixture_reflected_struct("External", "v"))
        .write("src/own.h", &fixture_reflected_struct("Own", "w"))
        .write(
            "src/main.cpp",
            "#include \"../third_party/lib.h\"\n#include \"own.h\"\n",
        );

    let summary = project.run(&["src/main.cpp"]);

    assert_eq!(summary.registered_types, vec!["Own".to_string()]);
    assert!(!project.exists("third_party/generated/lib.gen.h"));
}

#[test]
fn test_angle_includes_resolve_through_include_dirs() {
    let project = TestProject::new();
    project
        .write("src/engine/core.h", &fixture_reflected_struct("Core", "ticks"))
        .write("src/main.cpp", "#include <engine/core.h>\n#include <vector>\n");

    let summary = project.run(&["src/main.cpp"]);

    assert_eq!(summary.registered_types, vec!["Core".to_string()]);
    assert!(project.exists("src/engine/generated/core.gen.h"));
}

#[test]
fn test_multiple_roots_share_headers() {
    let project = TestProject::new();
    project
        .write("src/shared.h", &fixture_reflected_struct("Shared", "n"))
        .write("src/only_b.h", &fixture_reflected_struct("OnlyB", "m"))
        .write("src/a.cpp", &fixture_main(&["shared.h"]))
        .write("src/b.cpp", &fixture_main(&["shared.h", "only_b.h"]));

    let summary = project.run(&["src/a.cpp", "src/b.cpp"]);

    assert_eq!(summary.units_parsed, 2);
    assert_registered(&project.read(REGISTRY), &["Shared", "OnlyB"]);
}

#[test]
fn test_default_markers() {
    let project = TestProject::with_config(GeneratorConfig::default());
    project.write(
        "src/transform.h",
        "struct Transform {\nDEF_CLASS()\nDEF_PROPERTY()\nfloat x;\n};\n",
    );

    project.run(&["src/transform.h"]);

    assert!(project
        .read("src/generated/transform.gen.h")
        .contains("offsetof(Transform, x)"));
}

#[test]
fn test_missing_root_fails_without_registry() {
    let project = TestProject::new();

    let err = project.try_run(&["src/nope.cpp"]).unwrap_err();

    assert_eq!(err.kind, ErrorKind::IO);
    assert!(err.to_string().contains("nope.cpp"));
    assert!(!project.exists(REGISTRY));
}
