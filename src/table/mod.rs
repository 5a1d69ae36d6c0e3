//! Delimited-text parsing and preview extraction.

mod delimiter;
mod parser;

pub use delimiter::{CANDIDATES, DelimiterGuess, FALLBACK, guess_delimiter};
pub use parser::{Record, parse_records};

use crate::config::LoaderConfig;
use crate::error::{ParseError, TableError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// The header and leading data records of a parsed input.
///
/// Row lengths are not checked against the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Turns raw delimited text into a [`ParsedTable`].
#[derive(Debug, Clone, Default)]
pub struct TableLoader {
    config: LoaderConfig,
}

impl TableLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> TableLoaderBuilder {
        TableLoaderBuilder::default()
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parses every record of `text` with the configured (or guessed) delimiter.
    pub fn parse(&self, text: &str) -> Result<Vec<Record>, ParseError> {
        let delimiter = match self.config.delimiter {
            Some(delimiter) => delimiter,
            None => {
                let guess = guess_delimiter(text);
                if !guess.detected {
                    tracing::warn!(
                        fallback = %guess.delimiter.escape_debug(),
                        "unable to detect delimiter, using fallback"
                    );
                }
                guess.delimiter
            }
        };
        tracing::debug!(delimiter = %delimiter.escape_debug(), "parsing delimited text");
        parse_records(text, delimiter)
    }

    /// Parses `text` and keeps the header plus the first configured number of rows.
    ///
    /// Fails with [`TableError::Empty`] unless at least one data record follows
    /// the header.
    pub fn load_text(&self, source_name: &str, text: &str) -> Result<ParsedTable, TableError> {
        let records = self.parse(text).map_err(|source| TableError::Parse {
            source_name: source_name.to_string(),
            source,
        })?;

        // A header without a single data record counts as empty.
        let mut records = records.into_iter().peekable();
        let header = match records.next() {
            Some(header) if records.peek().is_some() => header,
            _ => {
                return Err(TableError::Empty {
                    source_name: source_name.to_string(),
                });
            }
        };
        let rows: Vec<Vec<String>> = records.take(self.config.preview_rows).collect();

        tracing::debug!(
            source = source_name,
            columns = header.len(),
            preview_rows = rows.len(),
            "loaded table"
        );
        Ok(ParsedTable { header, rows })
    }

    /// Reads the whole file and loads it under its file name.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ParsedTable, TableError> {
        let path = path.as_ref();
        let source_name = source_name_of(path);
        let bytes = fs::read(path).map_err(|e| TableError::Read {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;
        let text = String::from_utf8_lossy(&bytes);
        self.load_text(&source_name, &text)
    }
}

/// The name a file is shown under: its final path component.
pub fn source_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Builder for a [`TableLoader`].
#[derive(Debug, Default)]
pub struct TableLoaderBuilder {
    config: LoaderConfig,
}

impl TableLoaderBuilder {
    /// Forces a delimiter instead of guessing one.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = Some(delimiter);
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.config.preview_rows = rows;
        self
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TableLoader {
        TableLoader::new(self.config)
    }
}
