//! The upload/preview surface: one table, its source, and the mapping editor built on it.

use crate::config::{Config, EditorLayout};
use crate::editor::MappingEditor;
use crate::error::TableError;
use crate::sample::{SAMPLE_SOURCE_NAME, sample_text};
use crate::table::{ParsedTable, TableLoader, source_name_of};
use std::path::Path;

/// State of a single user session.
///
/// Every load replaces the whole state. A failed load leaves only the error
/// message behind, never a stale preview.
#[derive(Debug, Default)]
pub struct Session {
    loader: TableLoader,
    layout: EditorLayout,
    table: Option<ParsedTable>,
    source_name: Option<String>,
    error: Option<String>,
    editor: Option<MappingEditor>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            loader: TableLoader::new(config.loader),
            layout: config.layout,
            ..Self::default()
        }
    }

    pub fn table(&self) -> Option<&ParsedTable> {
        self.table.as_ref()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// How many data records a successful load keeps.
    pub fn preview_rows(&self) -> usize {
        self.loader.config().preview_rows
    }

    /// The mapping editor, present while a table with a non-empty header is loaded.
    pub fn editor(&self) -> Option<&MappingEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut MappingEditor> {
        self.editor.as_mut()
    }

    /// Loads a file from disk. The file name is shown while it is being read.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&ParsedTable, TableError> {
        let path = path.as_ref();
        self.reset();
        let source_name = source_name_of(path);
        self.source_name = Some(source_name.clone());
        let result = self.loader.load_file(path);
        self.finish(source_name, result)
    }

    /// Loads text that did not come from a file, shown under `source_name`.
    pub fn load_text(
        &mut self,
        source_name: &str,
        text: &str,
    ) -> Result<&ParsedTable, TableError> {
        self.reset();
        let result = self.loader.load_text(source_name, text);
        self.finish(source_name.to_string(), result)
    }

    /// Loads the built-in sample.
    pub fn load_example(&mut self) -> Result<&ParsedTable, TableError> {
        self.load_text(SAMPLE_SOURCE_NAME, sample_text())
    }

    fn reset(&mut self) {
        self.table = None;
        self.source_name = None;
        self.error = None;
        self.editor = None;
    }

    fn finish(
        &mut self,
        source_name: String,
        result: Result<ParsedTable, TableError>,
    ) -> Result<&ParsedTable, TableError> {
        match result {
            Ok(table) => {
                self.editor = if table.header.is_empty() {
                    None
                } else {
                    Some(MappingEditor::with_headers(
                        self.layout.clone(),
                        table.header.as_slice(),
                    ))
                };
                self.source_name = Some(source_name);
                Ok(&*self.table.insert(table))
            }
            Err(e) => {
                tracing::error!(source = e.source_name(), error = %e, "failed to load table");
                self.error = Some(e.to_string());
                self.source_name = None;
                Err(e)
            }
        }
    }
}
