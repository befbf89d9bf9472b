//! Dependency tree rendering for `depgraph tree` output.

use std::io::{self, Write};

use colored::Colorize;
use depgraph_core::TreeNode;

use super::color::{colorize_name, dimmed};
use super::{OutputConfig, OutputMode, write_json};

/// Print every root's dependency tree.
///
/// Renders each root like:
/// ```text
/// ◆ app
/// ├── lib
/// │   └── core
/// └── assets
/// ```
///
/// In JSON mode the tree projection is printed as-is
/// (`[{"app": [{"lib": ["core"]}, "assets"]}]`).
pub fn print_trees(trees: &[TreeNode], mode: OutputMode, config: &OutputConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => {
            for tree in trees {
                print_tree_text(&mut handle, tree, config)?;
            }
            Ok(())
        }
        OutputMode::Json => write_json(&mut handle, &trees),
    }
}

/// Render one root with ASCII art connectors.
fn print_tree_text<W: Write>(w: &mut W, root: &TreeNode, config: &OutputConfig) -> io::Result<()> {
    let root_icon = if config.use_ascii { "*" } else { "◆" };
    let root_icon_str = if config.use_colors {
        root_icon.cyan().bold().to_string()
    } else {
        root_icon.to_string()
    };

    writeln!(
        w,
        "{} {}",
        root_icon_str,
        colorize_name(root.name().as_str(), config)
    )?;

    print_tree_children(w, root.dependencies(), config)
}

/// Render the descendants of a root with connector lines.
///
/// `segments` holds one flag per open ancestor level: whether that level
/// still has siblings below, which decides between `│` and blank padding.
fn print_tree_children<W: Write>(
    w: &mut W,
    children: &[TreeNode],
    config: &OutputConfig,
) -> io::Result<()> {
    let (branch, corner, pipe, space) = if config.use_ascii {
        ("|-- ", "`-- ", "|   ", "    ")
    } else {
        ("├── ", "└── ", "│   ", "    ")
    };

    // (siblings at this level, index of the next one to print)
    let mut stack: Vec<(&[TreeNode], usize)> = vec![(children, 0)];
    let mut segments: Vec<bool> = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let (siblings, next) = *frame;
        if next == siblings.len() {
            stack.pop();
            segments.pop();
            continue;
        }
        frame.1 += 1;

        let child = &siblings[next];
        let is_last = next + 1 == siblings.len();

        let mut prefix = String::new();
        for &has_more in &segments {
            let segment = if has_more { pipe } else { space };
            prefix.push_str(&dimmed(segment, config));
        }

        let connector = if is_last { corner } else { branch };

        writeln!(
            w,
            "{}{}{}",
            prefix,
            dimmed(connector, config),
            colorize_name(child.name().as_str(), config)
        )?;

        if !child.is_leaf() {
            segments.push(!is_last);
            stack.push((child.dependencies(), 0));
        }
    }

    Ok(())
}
