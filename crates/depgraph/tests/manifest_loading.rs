//! Integration tests for loading graphs from manifest files.

use depgraph::error::Error;
use depgraph::manifest::{GraphManifest, LoadMode, LoadWarning, build_graph};
use depgraph_core::{GraphError, NodeName};
use rstest::rstest;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("graph.yaml");
    std::fs::write(
        &path,
        "roots: [link]\ndependencies:\n  - parent: link\n    child: compile\n",
    )
    .expect("Failed to write manifest");

    let manifest = GraphManifest::load(&path).expect("manifest should load");
    let (graph, warnings) = build_graph(&manifest, LoadMode::Strict).expect("acyclic");

    assert!(warnings.is_empty());
    assert_eq!(
        serde_json::to_value(graph.to_tree()).expect("serialize"),
        serde_json::json!([{"link": ["compile"]}])
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let result = GraphManifest::load(&dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[rstest]
#[case::strict(LoadMode::Strict)]
#[case::lenient(LoadMode::Lenient)]
fn test_edges_apply_after_all_roots(#[case] mode: LoadMode) {
    // The edge names `b` as parent; it is only valid because roots are added
    // before any edge.
    let manifest: GraphManifest = "\
roots: [a, b]
dependencies:
  - parent: b
    child: c
"
    .parse()
    .expect("valid manifest");

    let (graph, warnings) = build_graph(&manifest, mode).expect("valid graph");
    assert!(warnings.is_empty());
    assert_eq!(graph.roots().len(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_strict_unknown_parent() {
    let manifest: GraphManifest = "\
roots: [a]
dependencies:
  - parent: c
    child: b
"
    .parse()
    .expect("valid manifest");

    let result = build_graph(&manifest, LoadMode::Strict);
    match result {
        Err(Error::Graph(GraphError::NoParent { parent })) => {
            assert_eq!(parent, NodeName::new("c"));
        }
        other => panic!("expected NoParent, got {other:?}"),
    }
}

#[test]
fn test_lenient_unknown_parent_keeps_graph() {
    let manifest: GraphManifest = "\
roots: [a]
dependencies:
  - parent: c
    child: b
"
    .parse()
    .expect("valid manifest");

    let (graph, warnings) = build_graph(&manifest, LoadMode::Lenient).expect("lenient");
    assert_eq!(
        warnings,
        vec![LoadWarning::OrphanedDependency {
            parent: NodeName::new("c"),
            child: NodeName::new("b"),
        }]
    );
    assert_eq!(
        serde_json::to_value(graph.to_tree()).expect("serialize"),
        serde_json::json!(["a"])
    );
}
