//! CLI argument structs for all commands.

use clap::Parser;
use std::path::PathBuf;

use crate::manifest::DEFAULT_MANIFEST_NAME;

/// Arguments for the `tree` and `flatten` commands
#[derive(Parser, Debug, Clone)]
pub struct GraphArgs {
    /// Path to the graph manifest (YAML or JSON)
    #[arg(default_value = DEFAULT_MANIFEST_NAME)]
    pub manifest: PathBuf,

    /// Skip edges the graph rejects instead of failing
    ///
    /// Skipped edges are reported as warnings on stderr.
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments for the `check` command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the graph manifest (YAML or JSON)
    #[arg(default_value = DEFAULT_MANIFEST_NAME)]
    pub manifest: PathBuf,
}
