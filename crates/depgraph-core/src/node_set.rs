//! Ordered, name-deduplicated collections of nodes.
//!
//! A `NodeSet` holds either the roots of a graph or the direct dependencies
//! of one node. Members keep their insertion order and no two members share a
//! name. [`NodeSetRef`] pairs a set with its graph so the members can be
//! queried and projected.

use crate::graph::DependencyGraph;
use crate::node::{Node, NodeName, NodeRef};
use crate::traversal;
use crate::tree::TreeNode;
use petgraph::graph::{DiGraph, NodeIndex};
use std::borrow::Cow;

/// An ordered collection of vertices, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NodeSet {
    members: Vec<NodeIndex>,
}

impl NodeSet {
    pub(crate) fn from_members(members: Vec<NodeIndex>) -> Self {
        Self { members }
    }

    pub(crate) fn members(&self) -> &[NodeIndex] {
        &self.members
    }

    /// Number of members
    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members
    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Find the member with the given name.
    pub(crate) fn find(&self, arena: &DiGraph<NodeName, ()>, name: &str) -> Option<NodeIndex> {
        self.members
            .iter()
            .copied()
            .find(|&member| arena[member].as_str() == name)
    }

    /// Append `index` unless a member with the same name is already present.
    ///
    /// Returns `false` for a duplicate; the set is unchanged in that case.
    pub(crate) fn add_sibling(&mut self, arena: &DiGraph<NodeName, ()>, index: NodeIndex) -> bool {
        if self.find(arena, arena[index].as_str()).is_some() {
            return false;
        }
        self.members.push(index);
        true
    }
}

/// A node set bound to the graph that owns its members.
#[derive(Debug, Clone)]
pub struct NodeSetRef<'g> {
    graph: &'g DependencyGraph,
    set: Cow<'g, NodeSet>,
}

impl<'g> NodeSetRef<'g> {
    pub(crate) fn new(graph: &'g DependencyGraph, set: Cow<'g, NodeSet>) -> Self {
        Self { graph, set }
    }

    /// Members in insertion order
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'g>> + '_ {
        let graph = self.graph;
        self.set
            .members()
            .iter()
            .map(move |&index| NodeRef::new(graph, index))
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Whether a member has the same name as `node`.
    pub fn has_sibling(&self, node: &Node) -> bool {
        self.get_sibling(node).is_some()
    }

    /// The member with the same name as `node`, if any.
    pub fn get_sibling(&self, node: &Node) -> Option<NodeRef<'g>> {
        self.set
            .find(self.graph.arena(), node.name().as_str())
            .map(|index| NodeRef::new(self.graph, index))
    }

    /// Whether a node named like `node` occurs anywhere in this set or below
    /// it.
    ///
    /// Equivalent to `!self.dependency_nodes(node).is_empty()` but stops at the
    /// first match.
    pub fn has_dependency(&self, node: &Node) -> bool {
        traversal::contains(self.graph.arena(), self.set.members(), node.name())
    }

    /// Every position in this set's subtree where a node named like `node`
    /// occurs.
    ///
    /// A matching member counts once and is not searched further; other
    /// members are searched through their dependencies. A node reachable over
    /// several paths is reported once per path, matching the number of times
    /// it appears in [`to_tree`](Self::to_tree). Every entry resolves to the
    /// same canonical vertex.
    pub fn dependency_nodes(&self, node: &Node) -> Vec<NodeRef<'g>> {
        traversal::positions(self.graph.arena(), self.set.members(), node.name())
            .into_iter()
            .map(|index| NodeRef::new(self.graph, index))
            .collect()
    }

    /// Tree projection of every member, in order.
    pub fn to_tree(&self) -> Vec<TreeNode> {
        traversal::build_trees(self.graph.arena(), self.set.members())
    }

    /// Names of all members and everything below them, each once.
    pub fn flatten(&self) -> Vec<NodeName> {
        traversal::flatten(self.graph.arena(), self.set.members())
    }
}
