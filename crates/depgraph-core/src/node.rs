//! Node identity and the canonical node view.
//!
//! A [`Node`] is what callers construct and hand to the graph. Once the graph
//! has adopted a node, it is read back through a [`NodeRef`], which exposes the
//! dependency queries of the canonical vertex.

use crate::graph::DependencyGraph;
use crate::node_set::{NodeSet, NodeSetRef};
use crate::traversal;
use crate::tree::TreeNode;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Name of a node, the unique key within a graph.
///
/// Names are opaque: the empty string is a valid name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeName(String);

impl NodeName {
    /// Create a new node name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for NodeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named vertex as supplied by a caller.
///
/// Two `Node` values with the same name are the same logical node. The graph
/// keeps the first one it sees and resolves later ones to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    name: NodeName,
}

impl Node {
    /// Create a node with an empty dependency set.
    pub fn new(name: impl Into<NodeName>) -> Self {
        Self { name: name.into() }
    }

    /// The node's name
    pub fn name(&self) -> &NodeName {
        &self.name
    }

    /// Consume the node, returning its name
    pub fn into_name(self) -> NodeName {
        self.name
    }
}

impl From<&str> for Node {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<NodeName> for Node {
    fn from(name: NodeName) -> Self {
        Self { name }
    }
}

/// A borrowed view of a canonical vertex inside a [`DependencyGraph`].
#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g DependencyGraph,
    index: NodeIndex,
}

impl<'g> NodeRef<'g> {
    pub(crate) fn new(graph: &'g DependencyGraph, index: NodeIndex) -> Self {
        Self { graph, index }
    }

    /// The node's name
    pub fn name(self) -> &'g NodeName {
        &self.graph.arena()[self.index]
    }

    /// Direct dependencies, in the order they were attached.
    pub fn immediate_dependencies(self) -> NodeSetRef<'g> {
        let members = traversal::dependencies(self.graph.arena(), self.index);
        NodeSetRef::new(self.graph, Cow::Owned(NodeSet::from_members(members)))
    }

    /// Whether `other` (by name) appears anywhere below this node.
    ///
    /// The node itself does not count as its own dependency.
    pub fn has_dependency(self, other: &Node) -> bool {
        self.immediate_dependencies().has_dependency(other)
    }

    /// Every position below this node where a node named like `other` occurs.
    ///
    /// See [`NodeSetRef::dependency_nodes`].
    pub fn dependency_nodes(self, other: &Node) -> Vec<NodeRef<'g>> {
        self.immediate_dependencies().dependency_nodes(other)
    }

    /// Tree projection: the bare name for a leaf, otherwise the name mapped
    /// to the trees of its dependencies.
    pub fn to_tree(self) -> TreeNode {
        traversal::build_tree(self.graph.arena(), self.index)
    }

    /// This node's name and the names of all its transitive dependencies,
    /// each once, dependencies first.
    pub fn flatten(self) -> Vec<NodeName> {
        traversal::flatten(self.graph.arena(), &[self.index])
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("name", self.name())
            .field("index", &self.index.index())
            .finish()
    }
}
