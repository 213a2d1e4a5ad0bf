use crate::{
    config::ParserConfig, entities::SourceFile, errors::ParserError, metrics::ParserMetrics,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of parsing several files independently
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchInfo {
    /// Outlines of successfully parsed files, in input order
    pub files: Vec<SourceFile>,

    /// Files that failed to parse (path, error message)
    pub failed_files: Vec<(PathBuf, String)>,

    /// Wall-clock time for the whole batch
    #[serde(with = "duration_serde")]
    pub total_parse_time: Duration,
}

// Helper module for serializing Duration
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_micros() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_micros(micros))
    }
}

impl BatchInfo {
    /// Total number of files processed (success + failure)
    pub fn total_files(&self) -> usize {
        self.files.len() + self.failed_files.len()
    }

    /// Top-level functions plus methods across all parsed files
    pub fn total_functions(&self) -> usize {
        self.files.iter().map(SourceFile::function_count).sum()
    }

    /// Entities across all parsed files
    pub fn total_entities(&self) -> usize {
        self.files.iter().map(SourceFile::entity_count).sum()
    }

    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.total_files() == 0 {
            0.0
        } else {
            self.files.len() as f64 / self.total_files() as f64
        }
    }
}

/// Core trait that all language parsers implement
///
/// A parser turns one source text into one [`SourceFile`]. Files are always
/// parsed independently of each other; batch helpers only collect results.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single parser can serve
/// concurrent parses.
pub trait SourceParser: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "python")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".py", ".pyw"])
    fn file_extensions(&self) -> &[&str];

    /// Extract the outline of in-memory source
    ///
    /// `path` is an opaque label copied into [`SourceFile::path`].
    ///
    /// **Note on Metrics**: This method does NOT update parser metrics.
    /// Only `parse_file()` does, to avoid double counting.
    fn parse_source(&self, source: &str, path: &str) -> Result<SourceFile, ParserError>;

    /// Read a file and extract its outline
    ///
    /// # Errors
    /// Returns `ParserError` if:
    /// - The extension is not supported
    /// - The file cannot be read or is too large
    /// - The parse engine cannot produce a tree
    fn parse_file(&self, path: &Path) -> Result<SourceFile, ParserError>;

    /// Parse multiple files (can be overridden for parallel parsing)
    ///
    /// Failures are collected, never propagated.
    fn parse_files(&self, paths: &[PathBuf]) -> BatchInfo {
        let start = Instant::now();
        let mut batch = BatchInfo::default();

        for path in paths {
            match self.parse_file(path) {
                Ok(file) => batch.files.push(file),
                Err(e) => batch.failed_files.push((path.clone(), e.to_string())),
            }
        }

        batch.total_parse_time = start.elapsed();
        batch
    }

    /// Parse every supported file below a directory
    fn parse_directory(&self, dir: &Path) -> Result<BatchInfo, ParserError> {
        let paths = self.discover_files(dir)?;
        Ok(self.parse_files(&paths))
    }

    /// Discover parseable files in a directory
    ///
    /// Default implementation walks the directory, skips the configured
    /// excluded directories and filters by extension. Results are sorted.
    fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ParserError> {
        use std::fs;

        fn walk_dir<P: SourceParser + ?Sized>(
            dir: &Path,
            parser: &P,
            files: &mut Vec<PathBuf>,
        ) -> Result<(), ParserError> {
            if !dir.is_dir() {
                return Ok(());
            }

            for entry in
                fs::read_dir(dir).map_err(|e| ParserError::IoError(dir.to_path_buf(), e))?
            {
                let entry = entry.map_err(|e| ParserError::IoError(dir.to_path_buf(), e))?;
                let path = entry.path();

                if path.is_dir() {
                    let excluded = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| parser.config().should_exclude_dir(n));
                    if !excluded {
                        walk_dir(&path, parser, files)?;
                    }
                } else if parser.can_parse(&path) {
                    files.push(path);
                }
            }

            Ok(())
        }

        let mut files = Vec::new();
        walk_dir(dir, self, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Check if this parser can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_parse(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }

    /// Get parser configuration
    fn config(&self) -> &ParserConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ParserMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}
