//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the fieldmap crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use fieldmap::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut session = Session::new(Config::default());
//! session.load_file("path/to/expenses.csv")?;
//! println!("{}", HtmlRenderer::render_session(&session));
//! # Ok(())
//! # }
//! ```

// Loading and preview
pub use crate::config::{Config, EditorLayout, LoaderConfig};
pub use crate::session::Session;
pub use crate::table::{ParsedTable, TableLoader};

// Mapping editor
pub use crate::editor::{
    Connection, Edge, EdgeChange, MappingEditor, Node, NodeChange, Position, Role,
};

// Rendering
pub use crate::render::{HtmlRenderer, TextRenderer};

// Error types
pub use crate::error::{ConfigError, EditorError, ParseError, ParseErrorKind, TableError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
