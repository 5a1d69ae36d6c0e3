//! # fieldmap - Delimited-Text Preview and Field Mapping
//!
//! **fieldmap** loads a delimited text file (or a built-in sample), previews its
//! header and first rows, and lets a user draw connections from each source column
//! to a small set of fixed destination fields. It is the first step of a data
//! transformation pipeline: the mapping is drawn, not yet executed.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: A [`Session`](session::Session) reads a file, raw text, or the
//!     built-in sample. The text is parsed in one pass; the first record is the
//!     header, and the next two records become the preview.
//! 2.  **Map**: A successful load rebuilds the [`MappingEditor`](editor::MappingEditor):
//!     one source node per header column plus the fixed "Vendor" and "Amount"
//!     destinations. Nodes can be moved, selected and removed; any two nodes can
//!     be connected.
//! 3.  **Render**: [`HtmlRenderer`](render::HtmlRenderer) and
//!     [`TextRenderer`](render::TextRenderer) draw the preview and the graph.
//!
//! A failed load never leaves a stale preview behind: the session keeps only a
//! single-line error message until the next load.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fieldmap::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::default();
//!     let table = session.load_example()?;
//!     println!("{} columns, {} preview rows", table.header.len(), table.rows.len());
//!
//!     let editor = session.editor_mut().expect("a loaded table has an editor");
//!     editor.connect(Connection::new("csv-Amount-3", "iif-amount"))?;
//!
//!     println!("{}", TextRenderer::render_session(&session));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod prelude;
pub mod render;
pub mod sample;
pub mod session;
pub mod table;
