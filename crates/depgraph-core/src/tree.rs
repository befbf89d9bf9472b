//! Nested tree projection of a dependency graph.
//!
//! A node without dependencies projects to its bare name. A node with
//! dependencies projects to a single-entry mapping from its name to the
//! projections of its dependencies. In JSON:
//!
//! ```text
//! [{"A": ["B", {"C": ["D"]}]}]
//! ```

use crate::node::NodeName;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// One node of the tree projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TreeNodeRepr")]
pub enum TreeNode {
    /// A node with no dependencies
    Leaf(NodeName),

    /// A node and the trees of its direct dependencies, in insertion order
    Branch {
        /// Name of the node
        name: NodeName,
        /// Trees of the direct dependencies (never empty)
        dependencies: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Name of the node at this position
    pub fn name(&self) -> &NodeName {
        match self {
            Self::Leaf(name) | Self::Branch { name, .. } => name,
        }
    }

    /// Trees of the direct dependencies; empty for a leaf
    pub fn dependencies(&self) -> &[TreeNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch { dependencies, .. } => dependencies,
        }
    }

    /// Whether this node has no dependencies
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

// The derived drop would recurse once per level of nesting.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let Self::Branch { dependencies, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(dependencies);
        while let Some(mut node) = pending.pop() {
            if let Self::Branch { dependencies, .. } = &mut node {
                pending.append(dependencies);
            }
        }
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(name) => name.serialize(serializer),
            Self::Branch { name, dependencies } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, dependencies)?;
                map.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TreeNodeRepr {
    Leaf(NodeName),
    Branch(BTreeMap<NodeName, Vec<TreeNode>>),
}

impl TryFrom<TreeNodeRepr> for TreeNode {
    type Error = String;

    fn try_from(repr: TreeNodeRepr) -> Result<Self, Self::Error> {
        match repr {
            TreeNodeRepr::Leaf(name) => Ok(Self::Leaf(name)),
            TreeNodeRepr::Branch(map) => {
                if map.len() != 1 {
                    return Err(format!(
                        "expected a single-entry mapping, found {} entries",
                        map.len()
                    ));
                }
                let Some((name, dependencies)) = map.into_iter().next() else {
                    return Err("expected a single-entry mapping".to_string());
                };
                if dependencies.is_empty() {
                    Ok(Self::Leaf(name))
                } else {
                    Ok(Self::Branch { name, dependencies })
                }
            }
        }
    }
}
