//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `tree`: Print the dependency tree of every root
//! - `flatten`: Print every reachable node once, dependencies first
//! - `check`: Report problems in a manifest without printing the graph
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--ascii`: Use ASCII connectors instead of Unicode
//!
//! # Example
//!
//! ```bash
//! depgraph tree build.yaml
//! depgraph --json flatten build.yaml
//! depgraph tree --lenient build.yaml
//! depgraph check build.yaml
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{CheckArgs, GraphArgs};

/// Depgraph - build and inspect dependency graphs
///
/// Reads a manifest of roots and `parent -> child` edges, rejects cycles, and
/// prints the resulting graph as a tree or a flat list.
#[derive(Parser, Debug)]
#[command(name = "depgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII connectors and icons instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the dependency tree of every root
    ///
    /// Shared dependencies are printed under each node that depends on them.
    Tree(GraphArgs),

    /// Print every node reachable from a root, once each
    ///
    /// Dependencies are listed before the nodes that depend on them.
    Flatten(GraphArgs),

    /// Check a manifest for duplicate roots, unknown parents and cycles
    ///
    /// Exits with a non-zero status when any problem is found.
    Check(CheckArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::output::{OutputConfig, OutputMode};

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let mut config = OutputConfig::from_env();
        config.use_ascii |= self.ascii;

        match &self.command {
            Some(Commands::Tree(args)) => execute::execute_tree(args, output_mode, &config),
            Some(Commands::Flatten(args)) => execute::execute_flatten(args, output_mode, &config),
            Some(Commands::Check(args)) => execute::execute_check(args, output_mode, &config),
            None => {
                println!("Depgraph dependency graph tool");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}
