//! Error types for dependency graph operations.

use crate::node::NodeName;
use thiserror::Error;

/// The error type for edge insertion.
///
/// Both variants are recoverable. The graph is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The parent was never added to the graph, neither as a root nor as the
    /// target of another edge.
    #[error("Parent node not present in graph: {parent}")]
    NoParent {
        /// Name of the missing parent
        parent: NodeName,
    },

    /// The child already depends on the parent, directly or transitively.
    #[error("Refusing to add circular dependency: {parent} -> {child}")]
    CircularDependency {
        /// Name of the would-be parent
        parent: NodeName,
        /// Name of the would-be child
        child: NodeName,
    },
}

/// A specialized Result type for dependency graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_nodes() {
        let no_parent = GraphError::NoParent {
            parent: NodeName::new("build"),
        };
        assert_eq!(
            no_parent.to_string(),
            "Parent node not present in graph: build"
        );

        let cycle = GraphError::CircularDependency {
            parent: NodeName::new("link"),
            child: NodeName::new("compile"),
        };
        assert_eq!(
            cycle.to_string(),
            "Refusing to add circular dependency: link -> compile"
        );
    }
}
