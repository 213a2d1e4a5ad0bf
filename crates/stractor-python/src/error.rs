use std::path::PathBuf;
use stractor_api::ParserError;
use thiserror::Error;

/// Failures of the tree-sitter engine itself
///
/// These never describe the input file; they surface to callers as
/// [`ParserError::ParseError`] for the file being parsed.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The Python grammar could not be loaded into the parser
    #[error("failed to load Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// A built-in structural query failed to compile
    #[error("invalid structural query: {0}")]
    Query(String),

    /// tree-sitter returned no tree for the input
    #[error("parser produced no syntax tree")]
    NoTree,
}

impl EngineError {
    /// Attach the path label of the file being parsed
    pub fn at(self, path: &str) -> ParserError {
        ParserError::ParseError(PathBuf::from(path), self.to_string())
    }
}
