//! Integration tests for import resolution from application files.

mod common;

use common::TestProject;
use contrib_resolver::config::ResolverConfig;
use contrib_resolver::core::ResolveError;
use contrib_resolver::import::Imports;
use contrib_resolver::resolver::{Resolver, get_imports, imports_from_json};
use serde_json::json;

fn rendered(imports: &Imports) -> Vec<String> {
    imports.iter().map(ToString::to_string).collect()
}

#[test]
fn test_imports_from_json_full_app() {
    let project = TestProject::new();
    let path = project.write_json(
        "flogo.json",
        &json!({
            "name": "orders",
            "type": "flogo:app",
            "imports": [
                "github.com/project-flogo/contrib/trigger/rest@v0.10.0",
                "github.com/project-flogo/flow",
                "logger github.com/project-flogo/contrib/activity/log",
                "github.com/unused/thing"
            ],
            "triggers": [{
                "id": "receive_http_message",
                "ref": "#rest",
                "settings": {"port": 9233},
                "handlers": [{"action": {"ref": "#flow", "settings": {"flowURI": "res://flow:main"}}}]
            }],
            "resources": [{
                "id": "flow:main",
                "data": {
                    "tasks": [
                        {"id": "log_1", "activity": {"ref": "#logger"}},
                        {"id": "mapper", "activity": {"ref": "#mapper"}}
                    ]
                }
            }]
        }),
    );

    let imports = imports_from_json(&path).unwrap();
    assert_eq!(
        rendered(&imports),
        vec![
            "github.com/project-flogo/contrib/trigger/rest@v0.10.0",
            "logger github.com/project-flogo/contrib/activity/log",
            "mapper",
        ]
    );
}

#[test]
fn test_imports_from_json_sorted() {
    let project = TestProject::new();
    let path = project.write_json(
        "flogo.json",
        &json!({
            "imports": ["github.com/x/zeta", "github.com/x/alpha"],
            "triggers": [{"ref": "#zeta"}],
            "actions": [{"ref": "#alpha"}]
        }),
    );

    let resolver = Resolver::new(ResolverConfig {
        sort_imports: true,
        ..Default::default()
    });
    assert_eq!(
        rendered(&resolver.imports_from_json(&path).unwrap()),
        vec!["github.com/x/alpha", "github.com/x/zeta"]
    );
}

#[test]
fn test_imports_from_json_errors() {
    let project = TestProject::new();

    let missing = imports_from_json(&project.path().join("missing.json"));
    assert!(matches!(missing, Err(ResolveError::Io { .. })));

    let malformed = project.write("bad.json", "{ \"triggers\": [");
    assert!(matches!(imports_from_json(&malformed), Err(ResolveError::Parse { .. })));

    let wrong_shape = project.write_json("shape.json", &json!({"imports": "not-a-list"}));
    assert!(matches!(imports_from_json(&wrong_shape), Err(ResolveError::Parse { .. })));

    let bad_ref = project.write_json("ref.json", &json!({"triggers": [{"ref": ["x"]}]}));
    assert!(matches!(imports_from_json(&bad_ref), Err(ResolveError::TypeMismatch { .. })));
}

#[test]
fn test_get_imports_deduplicates_declared() {
    let project = TestProject::new();
    let path = project.write_json(
        "flogo.json",
        &json!({
            "name": "app",
            "imports": [
                "github.com/x/rest@v1",
                "github.com/x/log",
                "github.com/x/rest@v1"
            ],
            "triggers": [{"id": "t", "ref": "github.com/should/not/appear", "type": "x"}]
        }),
    );

    let imports = get_imports(&path).unwrap();
    assert_eq!(rendered(&imports), vec!["github.com/x/rest@v1", "github.com/x/log"]);
}

#[test]
fn test_get_imports_legacy_fallback() {
    let project = TestProject::new();
    let path = project.write_json(
        "flogo.json",
        &json!({
            "name": "legacy",
            "triggers": [{"id": "timer", "ref": "github.com/x/trigger/timer", "type": "t"}],
            "actions": [
                {"id": "flow", "ref": "github.com/x/action/flow"},
                {"id": "flow2", "ref": "github.com/x/action/flow"}
            ]
        }),
    );

    let mut found = rendered(&get_imports(&path).unwrap());
    found.sort();
    assert_eq!(found, vec!["github.com/x/action/flow", "github.com/x/trigger/timer"]);
}

#[test]
fn test_get_imports_legacy_fallback_disabled() {
    let project = TestProject::new();
    let path = project.write_json(
        "flogo.json",
        &json!({"name": "legacy", "triggers": [{"id": "t", "ref": "github.com/x/t", "type": "t"}]}),
    );

    let resolver = Resolver::new(ResolverConfig {
        legacy_fallback: false,
        ..Default::default()
    });
    assert!(resolver.get_imports(&path).unwrap().is_empty());
}

#[test]
fn test_get_imports_missing_file_is_recoverable() {
    let project = TestProject::new();
    let result = get_imports(&project.path().join("flogo.json"));
    assert!(matches!(result, Err(ResolveError::Io { .. })));
}

#[test]
fn test_get_imports_null_imports_uses_legacy_fallback() {
    let project = TestProject::new();
    let path = project.write_json(
        "flogo.json",
        &json!({
            "name": "legacy",
            "imports": null,
            "triggers": [{"id": "timer", "ref": "github.com/x/trigger/timer", "type": "t"}]
        }),
    );

    let imports = get_imports(&path).unwrap();
    assert_eq!(rendered(&imports), vec!["github.com/x/trigger/timer"]);
}

#[test]
fn test_imports_from_json_scalar_tree_is_parse_error() {
    let project = TestProject::new();
    let path = project.write_json(
        "flogo.json",
        &json!({"imports": ["github.com/x/rest"], "triggers": 42, "resources": "x"}),
    );

    assert!(matches!(imports_from_json(&path), Err(ResolveError::Parse { .. })));
}
