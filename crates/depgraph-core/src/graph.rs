//! The dependency graph: canonical registry, roots and edge insertion.
//!
//! # Representation
//!
//! Vertices live in a `petgraph::DiGraph` arena and are reached through a
//! `HashMap<NodeName, NodeIndex>` registry, so each name maps to exactly one
//! vertex. Edges point from **dependent to dependency**: an edge `A -> B`
//! means A depends on B.
//!
//! # Cycle rejection
//!
//! Cycle detection is eager. Before `parent -> child` is stored, the graph
//! checks whether `child` already reaches `parent`. Since every accepted edge
//! passed the same check, the arena is acyclic at the start of every call and
//! a single reachability query is enough.

use crate::error::{GraphError, Result};
use crate::node::{Node, NodeName, NodeRef};
use crate::node_set::{NodeSet, NodeSetRef};
use crate::traversal::{self, Arena};
use crate::tree::TreeNode;
use petgraph::algo;
use petgraph::graph::NodeIndex;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A directed acyclic graph of named nodes.
///
/// Mutation needs `&mut self`; share it across threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Vertex storage. Node weights are names, edges carry no data.
    arena: Arena,

    /// Canonical vertex for every name ever adopted.
    ///
    /// Every vertex in `arena` has exactly one entry here.
    registry: HashMap<NodeName, NodeIndex>,

    /// Top-level nodes in the order they were added.
    roots: NodeSet,
}

impl DependencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Register `node` as a root.
    ///
    /// Returns `false` if a root with the same name already exists; the
    /// existing root and its dependencies are left untouched. A name already
    /// known as a dependency is promoted to a root using its canonical vertex.
    pub fn add_root(&mut self, node: Node) -> bool {
        let index = self.canonicalize(node);
        let added = self.roots.add_sibling(&self.arena, index);
        if added {
            debug!(root = %self.arena[index], "added root");
        } else {
            trace!(root = %self.arena[index], "root already present");
        }
        added
    }

    /// Record that `parent` depends on `child`.
    ///
    /// `parent` must already be in the graph. `child` is adopted if its name
    /// is new, otherwise the existing vertex with that name is used and the
    /// passed value is discarded. Adding an edge that already exists is a
    /// no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// - [`GraphError::CircularDependency`] if `child` already depends on
    ///   `parent`, directly or transitively, or both are the same node.
    /// - [`GraphError::NoParent`] if `parent` is not registered.
    ///
    /// On error the graph is unchanged.
    pub fn add_dependency(&mut self, parent: &Node, child: Node) -> Result<bool> {
        if self.has_circular_dependency(parent, &child) {
            return Err(GraphError::CircularDependency {
                parent: parent.name().clone(),
                child: child.into_name(),
            });
        }

        let Some(&parent_index) = self.registry.get(parent.name()) else {
            return Err(GraphError::NoParent {
                parent: parent.name().clone(),
            });
        };

        let child_index = self.canonicalize(child);
        if self.arena.find_edge(parent_index, child_index).is_none() {
            self.arena.add_edge(parent_index, child_index, ());
            debug!(
                parent = %self.arena[parent_index],
                child = %self.arena[child_index],
                "added dependency"
            );
        } else {
            trace!(
                parent = %self.arena[parent_index],
                child = %self.arena[child_index],
                "dependency already present"
            );
        }

        Ok(true)
    }

    /// Tree projection of every root, in the order the roots were added.
    pub fn to_tree(&self) -> Vec<TreeNode> {
        self.roots().to_tree()
    }

    /// Every name reachable from a root, each exactly once.
    ///
    /// Names appear in the order a depth-first walk over the roots finishes
    /// them, which places each dependency before the nodes depending on it.
    pub fn flatten(&self) -> Vec<NodeName> {
        traversal::flatten(&self.arena, self.roots.members())
    }

    /// The root set
    pub fn roots(&self) -> NodeSetRef<'_> {
        NodeSetRef::new(self, Cow::Borrowed(&self.roots))
    }

    /// The canonical node registered under `name`.
    pub fn node(&self, name: &str) -> Option<NodeRef<'_>> {
        self.registry
            .get(name)
            .map(|&index| NodeRef::new(self, index))
    }

    /// Whether a node with this name has been adopted.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Number of distinct nodes in the graph
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Number of dependency edges
    pub fn edge_count(&self) -> usize {
        self.arena.edge_count()
    }

    /// Resolve `node` to its canonical vertex, adopting it if the name is new.
    fn canonicalize(&mut self, node: Node) -> NodeIndex {
        if let Some(&index) = self.registry.get(node.name()) {
            return index;
        }
        let name = node.into_name();
        let index = self.arena.add_node(name.clone());
        self.registry.insert(name, index);
        index
    }

    /// Whether `parent -> child` would close a cycle.
    ///
    /// Uses petgraph's `has_path_connecting`, which is an iterative DFS. A
    /// path of length zero (same vertex) counts, so self edges are cycles.
    fn has_circular_dependency(&self, parent: &Node, child: &Node) -> bool {
        let (Some(&child_index), Some(&parent_index)) = (
            self.registry.get(child.name()),
            self.registry.get(parent.name()),
        ) else {
            return false;
        };
        algo::has_path_connecting(&self.arena, child_index, parent_index, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_root(name: &str) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        graph.add_root(Node::new(name));
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert!(graph.to_tree().is_empty());
        assert!(graph.flatten().is_empty());
        assert!(graph.roots().is_empty());
    }

    #[test]
    fn test_add_root_registers_node() {
        let mut graph = DependencyGraph::new();
        assert!(graph.add_root(Node::new("A")));
        assert!(graph.contains("A"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_add_root_twice_is_rejected() {
        let mut graph = graph_with_root("A");
        assert!(!graph.add_root(Node::new("A")));
        assert_eq!(graph.roots().len(), 1);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_dependency_can_be_promoted_to_root() {
        let mut graph = graph_with_root("A");
        graph
            .add_dependency(&Node::new("A"), Node::new("B"))
            .expect("A is a root");

        assert!(graph.add_root(Node::new("B")));
        assert_eq!(graph.len(), 2);
        let roots: Vec<&str> = graph.roots().iter().map(|n| n.name().as_str()).collect();
        assert_eq!(roots, vec!["A", "B"]);
    }

    #[test]
    fn test_self_dependency_is_circular() {
        let mut graph = graph_with_root("A");
        let err = graph
            .add_dependency(&Node::new("A"), Node::new("A"))
            .expect_err("self edge must be rejected");
        assert!(matches!(err, GraphError::CircularDependency { .. }));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_dependency_on_unknown_node_is_no_parent() {
        let mut graph = DependencyGraph::new();
        let err = graph
            .add_dependency(&Node::new("X"), Node::new("X"))
            .expect_err("X is not registered");
        assert_eq!(
            err,
            GraphError::NoParent {
                parent: NodeName::new("X")
            }
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn test_repeated_edge_is_stored_once() {
        let mut graph = graph_with_root("A");
        assert_eq!(graph.add_dependency(&Node::new("A"), Node::new("B")), Ok(true));
        assert_eq!(graph.add_dependency(&Node::new("A"), Node::new("B")), Ok(true));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_node_lookup_returns_canonical_vertex() {
        let mut graph = graph_with_root("A");
        graph
            .add_dependency(&Node::new("A"), Node::new("B"))
            .expect("A is a root");

        let first = graph.node("B").expect("B registered");
        let second = graph.node("B").expect("B registered");
        assert!(std::ptr::eq(first.name(), second.name()));
        assert!(graph.node("C").is_none());
    }
}
