//! A dependency graph of named nodes, built one edge at a time.
//!
//! Nodes are registered as roots, then linked parent -> child with
//! [`DependencyGraph::add_dependency`]. Every name resolves to one canonical
//! vertex, and an edge that would close a cycle is rejected before it is
//! stored. The graph can be read back as a nested tree or as a flat list of
//! unique names.
//!
//! ```
//! use depgraph_core::{DependencyGraph, Node};
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_root(Node::new("A"));
//! graph.add_dependency(&Node::new("A"), Node::new("B")).unwrap();
//! graph.add_dependency(&Node::new("A"), Node::new("C")).unwrap();
//!
//! let tree = serde_json::to_string(&graph.to_tree()).unwrap();
//! assert_eq!(tree, r#"[{"A":["B","C"]}]"#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod node;
pub mod node_set;
pub mod tree;

mod traversal;

pub use error::{GraphError, Result};
pub use graph::DependencyGraph;
pub use node::{Node, NodeName, NodeRef};
pub use node_set::NodeSetRef;
pub use tree::TreeNode;
