//! Iterative graph walks shared by nodes, node sets and the graph.
//!
//! Every walk keeps its own explicit stack, so traversal depth is limited by
//! the heap rather than the call stack. All walks assume the arena is acyclic,
//! which `DependencyGraph::add_dependency` guarantees.

use crate::node::NodeName;
use crate::tree::TreeNode;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

/// Vertex storage: node weights are names, edges point dependent -> dependency.
pub(crate) type Arena = DiGraph<NodeName, ()>;

/// Direct dependencies of `index` in the order the edges were added.
///
/// petgraph hands out outgoing edges newest first; edge indices only grow
/// because edges are never removed, so sorting on them restores insertion
/// order.
pub(crate) fn dependencies(arena: &Arena, index: NodeIndex) -> Vec<NodeIndex> {
    let mut edges: Vec<_> = arena
        .edges(index)
        .map(|edge| (edge.id(), edge.target()))
        .collect();
    edges.sort_unstable_by_key(|(id, _)| *id);
    edges.into_iter().map(|(_, target)| target).collect()
}

/// Whether a vertex named `name` is one of `starts` or below one of them.
pub(crate) fn contains(arena: &Arena, starts: &[NodeIndex], name: &NodeName) -> bool {
    let mut visited = HashSet::new();
    let mut stack: Vec<NodeIndex> = starts.iter().rev().copied().collect();

    while let Some(index) = stack.pop() {
        if arena[index] == *name {
            return true;
        }
        if visited.insert(index) {
            stack.extend(dependencies(arena, index).into_iter().rev());
        }
    }

    false
}

/// Every place a vertex named `name` occurs among `starts` or below them.
///
/// Matches are not descended into. Every other vertex is expanded each time
/// it is reached, so a match below a shared dependency is reported once per
/// path to it, the same count the tree projection shows.
pub(crate) fn positions(arena: &Arena, starts: &[NodeIndex], name: &NodeName) -> Vec<NodeIndex> {
    let mut found = Vec::new();
    let mut stack: Vec<NodeIndex> = starts.iter().rev().copied().collect();

    while let Some(index) = stack.pop() {
        if arena[index] == *name {
            found.push(index);
        } else {
            stack.extend(dependencies(arena, index).into_iter().rev());
        }
    }

    found
}

/// Names of `starts` and everything below them, each exactly once.
///
/// A name is emitted once all of its dependencies have been emitted, so the
/// result lists dependencies before their dependents.
pub(crate) fn flatten(arena: &Arena, starts: &[NodeIndex]) -> Vec<NodeName> {
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    // (vertex, dependencies already pushed)
    let mut stack: Vec<(NodeIndex, bool)> = starts.iter().rev().map(|&i| (i, false)).collect();

    while let Some((index, expanded)) = stack.pop() {
        if expanded {
            order.push(arena[index].clone());
            continue;
        }
        if !visited.insert(index) {
            continue;
        }
        stack.push((index, true));
        stack.extend(
            dependencies(arena, index)
                .into_iter()
                .rev()
                .filter(|child| !visited.contains(child))
                .map(|child| (child, false)),
        );
    }

    order
}

enum Step {
    Enter(NodeIndex),
    Leave { index: NodeIndex, children: usize },
}

/// Tree projection of each vertex in `starts`, in order.
pub(crate) fn build_trees(arena: &Arena, starts: &[NodeIndex]) -> Vec<TreeNode> {
    starts.iter().map(|&index| build_tree(arena, index)).collect()
}

/// Tree projection of a single vertex.
///
/// Finished subtrees are moved into their parent, so every node of the result
/// is built exactly once. A dependency shared by several parents is rebuilt
/// under each of them.
pub(crate) fn build_tree(arena: &Arena, index: NodeIndex) -> TreeNode {
    let mut out: Vec<TreeNode> = Vec::new();
    let mut stack = vec![Step::Enter(index)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(current) => {
                let children = dependencies(arena, current);
                stack.push(Step::Leave {
                    index: current,
                    children: children.len(),
                });
                stack.extend(children.into_iter().rev().map(Step::Enter));
            }
            Step::Leave {
                index: current,
                children,
            } => {
                let dependencies = out.split_off(out.len().saturating_sub(children));
                let name = arena[current].clone();
                out.push(if dependencies.is_empty() {
                    TreeNode::Leaf(name)
                } else {
                    TreeNode::Branch { name, dependencies }
                });
            }
        }
    }

    out.pop()
        .unwrap_or_else(|| TreeNode::Leaf(arena[index].clone()))
}
