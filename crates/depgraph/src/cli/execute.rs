//! Command execution logic.

use anyhow::{Context, Result};
use depgraph_core::DependencyGraph;

use super::args::{CheckArgs, GraphArgs};
use crate::error::Error;
use crate::manifest::{GraphManifest, LoadMode, build_graph};
use crate::output::{self, OutputConfig, OutputMode, WarningRecord, color};

/// Load a manifest and build its graph, printing any warnings.
fn load_graph(args: &GraphArgs, config: &OutputConfig) -> Result<DependencyGraph> {
    let manifest = GraphManifest::load(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;
    let mode = if args.lenient {
        LoadMode::Lenient
    } else {
        LoadMode::Strict
    };

    let (graph, warnings) = build_graph(&manifest, mode)?;
    tracing::debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        warnings = warnings.len(),
        "built graph from manifest"
    );
    output::print_warnings(&warnings, config)?;
    Ok(graph)
}

/// Execute the tree command
pub fn execute_tree(args: &GraphArgs, output_mode: OutputMode, config: &OutputConfig) -> Result<()> {
    let graph = load_graph(args, config)?;
    output::print_trees(&graph.to_tree(), output_mode, config)?;
    Ok(())
}

/// Execute the flatten command
pub fn execute_flatten(
    args: &GraphArgs,
    output_mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let graph = load_graph(args, config)?;
    output::print_names(&graph.flatten(), output_mode)?;
    Ok(())
}

/// Execute the check command
pub fn execute_check(args: &CheckArgs, output_mode: OutputMode, config: &OutputConfig) -> Result<()> {
    let manifest = GraphManifest::load(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;
    let (graph, warnings) = build_graph(&manifest, LoadMode::Lenient)?;

    match output_mode {
        OutputMode::Json => {
            let records: Vec<WarningRecord> = warnings.iter().map(WarningRecord::from).collect();
            output::print_json(&serde_json::json!({
                "nodes": graph.len(),
                "edges": graph.edge_count(),
                "problems": records,
            }))?;
        }
        OutputMode::Text => {
            if warnings.is_empty() {
                println!(
                    "{} {} nodes, {} edges",
                    color::success("ok:", config),
                    graph.len(),
                    graph.edge_count()
                );
            } else {
                for warning in &warnings {
                    println!("{} {}", color::error("problem:", config), warning);
                }
            }
        }
    }

    if warnings.is_empty() {
        Ok(())
    } else {
        Err(Error::ManifestProblems(warnings.len()).into())
    }
}
