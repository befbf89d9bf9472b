//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:  green  (clean `check`)
//!   - Warning:  yellow (skipped manifest entries)
//!   - Error:    red    (rejected edges)
//!   - Info:     cyan   (node names, root tree icon)
//!   - Muted:    dimmed (tree connectors)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Colorize a node name (cyan).
pub(crate) fn colorize_name(name: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return name.to_string();
    }
    name.cyan().to_string()
}

/// Apply dimmed style to text (for connectors).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}
