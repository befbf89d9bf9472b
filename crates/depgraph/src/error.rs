//! Error types for depgraph CLI operations.

use std::io;
use thiserror::Error;

/// The error type for depgraph CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The manifest could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An edge in the manifest was rejected by the graph.
    #[error("Graph error: {0}")]
    Graph(#[from] depgraph_core::GraphError),

    /// `check` found problems in the manifest.
    #[error("{0} problem(s) found in manifest")]
    ManifestProblems(usize),
}

/// A specialized Result type for depgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
