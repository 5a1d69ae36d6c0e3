//! Options for loading tables and laying out the mapping editor.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "loader": { "delimiter": ";" }, "layout": { "source_spacing": 60.0 } }
//! ```

use crate::editor::Position;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of data records kept after the header.
pub const DEFAULT_PREVIEW_ROWS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field delimiter. Guessed from the input when `None`.
    pub delimiter: Option<char>,
    pub preview_rows: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Where source nodes are placed when the editor is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorLayout {
    /// Position of the first source node.
    pub source_origin: Position,
    /// Vertical distance between consecutive source nodes.
    pub source_spacing: f64,
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self {
            source_origin: Position::new(100.0, 50.0),
            source_spacing: 50.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loader: LoaderConfig,
    pub layout: EditorLayout,
}

impl Config {
    pub fn from_json(path: &str, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Json {
            path: path.to_string(),
            source,
        })
    }

    /// Loads a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&display, &json)
    }
}
