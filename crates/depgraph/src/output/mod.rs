//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - [`tree`]: Dependency tree rendering with ASCII/Unicode connectors

pub mod color;
pub mod tree;

use crate::manifest::LoadWarning;
use depgraph_core::NodeName;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use tree::print_trees;

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only connectors and icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Settings taken from `DEPGRAPH_ASCII`, `DEPGRAPH_COLOR` and `NO_COLOR`.
    ///
    /// Any `NO_COLOR` value turns colour off. Unset or unparseable flags fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let no_color = env::var_os("NO_COLOR").is_some();

        Self {
            use_ascii: env_flag("DEPGRAPH_ASCII").unwrap_or(defaults.use_ascii),
            use_colors: !no_color && env_flag("DEPGRAPH_COLOR").unwrap_or(defaults.use_colors),
        }
    }
}

/// Parse a boolean environment variable; `None` when unset, empty or invalid.
fn env_flag(var: &str) -> Option<bool> {
    let value = env::var(var).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "" => None,
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => {
            tracing::warn!(var, %value, "ignoring unrecognised boolean");
            None
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a value as pretty JSON to stdout
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

/// Print flattened node names, one per line or as a JSON array
pub fn print_names(names: &[NodeName], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => write_names_text(&mut handle, names),
        OutputMode::Json => write_json(&mut handle, &names),
    }
}

fn write_names_text<W: Write>(w: &mut W, names: &[NodeName]) -> io::Result<()> {
    for name in names {
        writeln!(w, "{name}")?;
    }
    Ok(())
}

/// Print manifest load warnings to stderr
pub fn print_warnings(warnings: &[LoadWarning], config: &OutputConfig) -> io::Result<()> {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    write_warnings(&mut handle, warnings, config)
}

fn write_warnings<W: Write>(
    w: &mut W,
    warnings: &[LoadWarning],
    config: &OutputConfig,
) -> io::Result<()> {
    let label = color::warning("warning:", config);
    for warning in warnings {
        writeln!(w, "{label} {warning}")?;
    }
    Ok(())
}

/// Serializable form of a warning for `--json` output
#[derive(Debug, Serialize)]
pub struct WarningRecord {
    /// Machine-readable warning kind
    pub kind: &'static str,
    /// Human-readable message
    pub message: String,
}

impl From<&LoadWarning> for WarningRecord {
    fn from(warning: &LoadWarning) -> Self {
        let kind = match warning {
            LoadWarning::DuplicateRoot { .. } => "duplicate-root",
            LoadWarning::OrphanedDependency { .. } => "orphaned-dependency",
            LoadWarning::CircularDependency { .. } => "circular-dependency",
        };
        Self {
            kind,
            message: warning.to_string(),
        }
    }
}
