use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting an outline
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to read file
    #[error("IO error reading {0}: {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// The parse engine produced no syntax tree
    #[error("Parse error in {0}: {1}")]
    ParseError(PathBuf, String),

    /// Syntax error in source code (strict mode only)
    #[error("Syntax error in {0}:{1}:{2}: {3}")]
    SyntaxError(PathBuf, usize, usize, String),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, usize),

    /// File extension not handled by this parser
    #[error("Unsupported file {0}")]
    UnsupportedFile(PathBuf),

    /// Invalid parser configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ParserError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ParserError::IoError(path, _)
            | ParserError::ParseError(path, _)
            | ParserError::SyntaxError(path, _, _, _)
            | ParserError::FileTooLarge(path, _)
            | ParserError::UnsupportedFile(path) => Some(path),
            ParserError::InvalidConfig(_) => None,
        }
    }
}

/// Result type for parser operations
pub type ParserResult<T> = Result<T, ParserError>;
