use thiserror::Error;

/// Structural problems the tokenizer can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Quoted field unterminated")]
    MissingQuotes,

    #[error("Trailing quote on quoted field is malformed")]
    InvalidQuotes,
}

/// A structural error in delimited text, tied to the record it occurred in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 0-based index of the record the error was found in.
    pub row: usize,
    /// Byte offset into the input where the offending field began.
    pub offset: usize,
}

/// Errors that can occur while loading a table for preview.
///
/// The display form of each variant is the single line shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Error parsing CSV ({source_name}): {source}")]
    Parse {
        source_name: String,
        #[source]
        source: ParseError,
    },

    #[error("CSV file ({source_name}) is empty or contains no data.")]
    Empty { source_name: String },

    #[error("Failed to parse file: {message}")]
    Read { source_name: String, message: String },
}

impl TableError {
    /// Name of the file or label the failed attempt was made against.
    pub fn source_name(&self) -> &str {
        match self {
            TableError::Parse { source_name, .. }
            | TableError::Empty { source_name }
            | TableError::Read { source_name, .. } => source_name,
        }
    }
}

/// Errors that can occur while editing the mapping graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Node '{0}' does not exist in the mapping editor")]
    UnknownNode(String),
}

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
