//! Stylesheet and JSON output.
//!
//! Turns emitted rules into CSS text and expanded maps into JSON. Rules are
//! written in the order given, one block per rule.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::emit::StyleRule;
use crate::error::{Result, ShadesError};
use crate::types::ExpandedColorMap;

/// Layout of rendered CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleFormat {
    /// One declaration per block, blocks separated by a blank line.
    #[default]
    Pretty,
    /// One `selector{property:value}` per line.
    Compact,
}

/// Render rules as CSS text.
pub fn render_stylesheet(rules: &[StyleRule], format: StyleFormat) -> String {
    let mut css = String::new();

    for (i, rule) in rules.iter().enumerate() {
        match format {
            StyleFormat::Pretty => {
                if i > 0 {
                    css.push('\n');
                }
                css.push_str(&format!(
                    "{} {{\n  {}: {};\n}}\n",
                    rule.selector, rule.property, rule.value
                ));
            }
            StyleFormat::Compact => {
                css.push_str(&format!("{}{{{}:{}}}\n", rule.selector, rule.property, rule.value));
            }
        }
    }

    css
}

/// Render rules and write them to `path`.
pub fn write_stylesheet(rules: &[StyleRule], format: StyleFormat, path: &Path) -> Result<()> {
    let css = render_stylesheet(rules, format);
    fs::write(path, css).map_err(|e| ShadesError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write stylesheet: {}", e),
    })?;
    debug!(path = %path.display(), rules = rules.len(), "wrote stylesheet");
    Ok(())
}

/// Serialize an expanded map as pretty JSON, keeping colour and variant order.
pub fn to_json(expanded: &ExpandedColorMap) -> Result<String> {
    serde_json::to_string_pretty(expanded).map_err(|e| ShadesError::Build {
        message: format!("Failed to serialize palette: {}", e),
        help: None,
    })
}

/// Write an expanded map as JSON to `path`.
pub fn write_palette_json(expanded: &ExpandedColorMap, path: &Path) -> Result<()> {
    let json = to_json(expanded)?;
    fs::write(path, json).map_err(|e| ShadesError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write palette JSON: {}", e),
    })?;
    debug!(path = %path.display(), colours = expanded.len(), "wrote palette JSON");
    Ok(())
}
