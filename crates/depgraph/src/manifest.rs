//! Graph manifests: loading a dependency graph from a YAML file.
//!
//! A manifest lists the roots and then the edges, applied in file order:
//!
//! ```yaml
//! roots: [app]
//! dependencies:
//!   - parent: app
//!     child: lib
//!   - parent: lib
//!     child: core
//! ```
//!
//! JSON is valid YAML, so the same structure can be written as JSON.

use crate::error::{Error, Result};
use depgraph_core::{DependencyGraph, GraphError, Node, NodeName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Name of the manifest file looked up when no path is given
pub const DEFAULT_MANIFEST_NAME: &str = "depgraph.yaml";

/// Manifest file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GraphManifest {
    /// Root node names, in order
    #[serde(default)]
    pub roots: Vec<String>,

    /// Dependency edges, applied after all roots
    #[serde(default)]
    pub dependencies: Vec<EdgeSpec>,
}

/// One `parent -> child` edge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    /// The dependent node
    pub parent: String,

    /// The node it depends on
    pub child: String,
}

impl GraphManifest {
    /// Load a manifest from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }
}

impl FromStr for GraphManifest {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        // An empty document is an empty graph, not a parse error.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// How [`build_graph`] treats edges the graph rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Stop at the first rejected edge
    #[default]
    Strict,
    /// Skip rejected edges and report them as warnings
    Lenient,
}

/// Non-fatal problems found while building a graph from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The same root is listed more than once
    ///
    /// **Effect**: Later entries are ignored.
    DuplicateRoot {
        /// Repeated root name
        name: NodeName,
    },

    /// An edge names a parent that is neither a root nor the child of an
    /// earlier edge
    ///
    /// **Effect**: The edge is skipped (lenient mode only).
    OrphanedDependency {
        /// Unknown parent
        parent: NodeName,
        /// Child of the skipped edge
        child: NodeName,
    },

    /// An edge would close a cycle
    ///
    /// **Effect**: The edge is skipped (lenient mode only).
    CircularDependency {
        /// Parent of the skipped edge
        parent: NodeName,
        /// Child of the skipped edge
        child: NodeName,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoot { name } => write!(f, "Duplicate root ignored: {name}"),
            Self::OrphanedDependency { parent, child } => write!(
                f,
                "Skipped dependency with unknown parent: {parent} -> {child}"
            ),
            Self::CircularDependency { parent, child } => {
                write!(f, "Skipped circular dependency: {parent} -> {child}")
            }
        }
    }
}

/// Build a dependency graph from a manifest.
///
/// Roots are added first, in order, then every edge in order.
///
/// # Errors
///
/// In [`LoadMode::Strict`], returns [`Error::Graph`] for the first edge the
/// graph rejects. In [`LoadMode::Lenient`] rejected edges become warnings and
/// loading never fails.
pub fn build_graph(
    manifest: &GraphManifest,
    mode: LoadMode,
) -> Result<(DependencyGraph, Vec<LoadWarning>)> {
    let mut graph = DependencyGraph::new();
    let mut warnings = Vec::new();

    for root in &manifest.roots {
        if !graph.add_root(Node::new(root.as_str())) {
            tracing::warn!(root = %root, "duplicate root in manifest");
            warnings.push(LoadWarning::DuplicateRoot {
                name: NodeName::new(root.as_str()),
            });
        }
    }

    for edge in &manifest.dependencies {
        let parent = Node::new(edge.parent.as_str());
        let result = graph.add_dependency(&parent, Node::new(edge.child.as_str()));
        let Err(err) = result else {
            continue;
        };

        if mode == LoadMode::Strict {
            return Err(err.into());
        }

        let warning = match err {
            GraphError::NoParent { parent } => LoadWarning::OrphanedDependency {
                parent,
                child: NodeName::new(edge.child.as_str()),
            },
            GraphError::CircularDependency { parent, child } => {
                LoadWarning::CircularDependency { parent, child }
            }
        };
        tracing::warn!(%warning, "skipping manifest edge");
        warnings.push(warning);
    }

    Ok((graph, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
roots: [app]
dependencies:
  - parent: app
    child: lib
  - parent: lib
    child: core
";

    #[test]
    fn test_parse_yaml_manifest() {
        let manifest: GraphManifest = SAMPLE.parse().expect("valid manifest");
        assert_eq!(manifest.roots, vec!["app"]);
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(
            manifest.dependencies[1],
            EdgeSpec {
                parent: "lib".to_string(),
                child: "core".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_json_manifest() {
        let manifest: GraphManifest =
            r#"{"roots": ["a"], "dependencies": [{"parent": "a", "child": "b"}]}"#
                .parse()
                .expect("JSON is valid YAML");
        assert_eq!(manifest.roots, vec!["a"]);
        assert_eq!(manifest.dependencies[0].child, "b");
    }

    #[test]
    fn test_empty_manifest_is_empty_graph() {
        let manifest: GraphManifest = "  \n".parse().expect("empty is valid");
        assert_eq!(manifest, GraphManifest::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<GraphManifest> = "roots: [a]\nedges: []\n".parse();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_build_graph_strict() {
        let manifest: GraphManifest = SAMPLE.parse().expect("valid manifest");
        let (graph, warnings) = build_graph(&manifest, LoadMode::Strict).expect("acyclic");
        assert!(warnings.is_empty());
        assert_eq!(graph.len(), 3);
        let flat: Vec<String> = graph
            .flatten()
            .into_iter()
            .map(|n| n.as_str().to_string())
            .collect();
        assert_eq!(flat, vec!["core", "lib", "app"]);
    }

    #[test]
    fn test_build_graph_strict_stops_on_cycle() {
        let manifest = GraphManifest {
            roots: vec!["a".to_string()],
            dependencies: vec![
                EdgeSpec {
                    parent: "a".to_string(),
                    child: "b".to_string(),
                },
                EdgeSpec {
                    parent: "b".to_string(),
                    child: "a".to_string(),
                },
            ],
        };
        let result = build_graph(&manifest, LoadMode::Strict);
        assert!(matches!(
            result,
            Err(Error::Graph(GraphError::CircularDependency { .. }))
        ));
    }

    #[test]
    fn test_build_graph_lenient_collects_warnings() {
        let manifest = GraphManifest {
            roots: vec!["a".to_string(), "a".to_string()],
            dependencies: vec![
                EdgeSpec {
                    parent: "a".to_string(),
                    child: "b".to_string(),
                },
                EdgeSpec {
                    parent: "ghost".to_string(),
                    child: "b".to_string(),
                },
                EdgeSpec {
                    parent: "b".to_string(),
                    child: "a".to_string(),
                },
            ],
        };

        let (graph, warnings) = build_graph(&manifest, LoadMode::Lenient).expect("lenient");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            warnings,
            vec![
                LoadWarning::DuplicateRoot {
                    name: NodeName::new("a")
                },
                LoadWarning::OrphanedDependency {
                    parent: NodeName::new("ghost"),
                    child: NodeName::new("b"),
                },
                LoadWarning::CircularDependency {
                    parent: NodeName::new("b"),
                    child: NodeName::new("a"),
                },
            ]
        );
    }

    #[test]
    fn test_warning_messages() {
        let warning = LoadWarning::CircularDependency {
            parent: NodeName::new("b"),
            child: NodeName::new("a"),
        };
        assert_eq!(warning.to_string(), "Skipped circular dependency: b -> a");
    }
}
