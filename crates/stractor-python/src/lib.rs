//! # stractor-python
//!
//! Python plugin for stractor - extracts the structural outline of Python
//! source files: module docstring, imports, top-level attributes, top-level
//! functions and classes with their methods.
//!
//! ## Features
//!
//! - Parse in-memory source, single files or entire directory trees
//! - Docstrings separated from function bodies
//! - Only direct children of each scope are reported, in source order
//! - Tolerant of syntax errors by default, strict mode on request
//! - Parallel batch parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use stractor_python::PythonParser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = PythonParser::new();
//! let file = parser.parse("def greet(name: str) -> str:\n    return name\n")?;
//!
//! let greet = &file.top_level_functions[0];
//! assert_eq!(greet.parameters, "name: str");
//! assert_eq!(greet.return_type.as_deref(), Some("str"));
//! # Ok(())
//! # }
//! ```
//!
//! Files and directories go through the [`SourceParser`] trait:
//!
//! ```rust,no_run
//! use stractor_python::{PythonParser, SourceParser};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = PythonParser::new();
//! let batch = parser.parse_directory(Path::new("src"))?;
//! println!("Parsed {} files, {} functions", batch.total_files(), batch.total_functions());
//! # Ok(())
//! # }
//! ```

pub mod error;

mod docstring;
mod extractor;
mod parser_impl;
mod queries;
mod text;

// Re-export api types for convenience
pub use stractor_api::{
    BatchInfo, Entity, EntityKind, Function, ParserConfig, ParserError, ParserMetrics,
    ParserResult, SourceFile, SourceParser,
};

pub use error::EngineError;
pub use parser_impl::PythonParser;
