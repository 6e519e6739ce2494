//! FILENAME: core/render/src/lib.rs
//! Render Module
//!
//! Registers finished tables and writes them out as HTML fragments,
//! aligned plain text, or JSON.

mod error;
mod html_writer;
mod registry;
mod text_writer;

pub use error::RenderError;
pub use html_writer::{displayable_html, write_html};
pub use registry::TableRegistry;
pub use text_writer::write_text;

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(label)
    }
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// Renders every registered table, in registration order.
pub fn render_document(registry: &TableRegistry, format: OutputFormat) -> Result<String, RenderError> {
    let tables = registry.tables();
    let document = match format {
        OutputFormat::Html => write_html(tables)?,
        OutputFormat::Text => write_text(tables),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(tables)?;
            json.push('\n');
            json
        }
    };
    Ok(document)
}

/// Renders the registry and writes it to `path`.
pub fn save_document(
    registry: &TableRegistry,
    format: OutputFormat,
    path: &Path,
) -> Result<(), RenderError> {
    let document = render_document(registry, format)?;
    std::fs::write(path, document)?;
    info!("Wrote {} tables as {} to {:?}", registry.len(), format, path);
    Ok(())
}
