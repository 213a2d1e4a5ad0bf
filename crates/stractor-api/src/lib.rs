//! Stractor API
//!
//! Shared trait and types for building source outline extractors.
//!
//! This crate defines:
//!
//! - **SourceParser trait**: The interface every language plugin implements
//! - **Outline model**: Language-agnostic `SourceFile`, `Function` and `Entity`
//! - **Configuration**: Customizable parser behavior
//! - **Metrics**: Success and timing counters
//! - **Error handling**: One error enum for all entry points
//!
//! # Example
//!
//! ```rust,ignore
//! use stractor_api::{SourceParser, SourceFile, ParserConfig, ParserError, ParserMetrics};
//! use std::path::Path;
//!
//! struct MyParser {
//!     config: ParserConfig,
//! }
//!
//! impl SourceParser for MyParser {
//!     fn language(&self) -> &str {
//!         "mylang"
//!     }
//!
//!     fn file_extensions(&self) -> &[&str] {
//!         &[".my"]
//!     }
//!
//!     fn parse_source(&self, source: &str, path: &str) -> Result<SourceFile, ParserError> {
//!         Ok(SourceFile::new(path))
//!     }
//!
//!     fn parse_file(&self, path: &Path) -> Result<SourceFile, ParserError> {
//!         let source = std::fs::read_to_string(path)
//!             .map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;
//!         self.parse_source(&source, &path.display().to_string())
//!     }
//!
//!     fn config(&self) -> &ParserConfig {
//!         &self.config
//!     }
//!
//!     fn metrics(&self) -> ParserMetrics {
//!         ParserMetrics::default()
//!     }
//!
//!     fn reset_metrics(&mut self) {}
//! }
//! ```

pub mod config;
pub mod entities;
pub mod errors;
pub mod metrics;
pub mod traits;

// Re-export commonly used types
pub use config::ParserConfig;
pub use entities::{Entity, EntityKind, Function, SourceFile};
pub use errors::{ParserError, ParserResult};
pub use metrics::ParserMetrics;
pub use traits::{BatchInfo, SourceParser};
