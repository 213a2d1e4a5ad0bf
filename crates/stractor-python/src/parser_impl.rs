//! Implementation of the SourceParser trait for Python
//!
//! `PythonParser` keeps no per-parse state: every call builds its own
//! tree-sitter parser and tree, so one instance may serve concurrent parses.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use stractor_api::{
    BatchInfo, ParserConfig, ParserError, ParserMetrics, ParserResult, SourceFile, SourceParser,
};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

/// Python language parser implementing the SourceParser trait
pub struct PythonParser {
    config: ParserConfig,
    metrics: Mutex<ParserMetrics>,
}

impl PythonParser {
    /// Create a new Python parser with default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
            metrics: Mutex::new(ParserMetrics::default()),
        }
    }

    /// Create a new Python parser with custom configuration
    pub fn with_config(config: ParserConfig) -> ParserResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            metrics: Mutex::new(ParserMetrics::default()),
        })
    }

    /// Extract the outline of in-memory source with an empty path label
    pub fn parse(&self, source: &str) -> ParserResult<SourceFile> {
        self.parse_source(source, "")
    }

    /// Update metrics after parsing a file
    fn update_metrics(&self, result: &ParserResult<SourceFile>, duration: Duration) {
        let (functions, entities) = match result {
            Ok(file) => (file.function_count(), file.entity_count()),
            Err(_) => (0, 0),
        };
        // A poisoned lock only means another parse panicked mid-update
        let mut metrics = self
            .metrics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        metrics.record(result.is_ok(), duration, functions, entities);
    }

    fn parse_files_parallel(&self, paths: &[PathBuf]) -> Vec<(PathBuf, ParserResult<SourceFile>)> {
        let run = || -> Vec<(PathBuf, ParserResult<SourceFile>)> {
            paths
                .par_iter()
                .map(|path| (path.clone(), self.parse_file(path)))
                .collect()
        };

        match self.config.parallel_workers {
            Some(workers) => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
                Ok(pool) => pool.install(run),
                Err(e) => {
                    warn!(error = %e, "failed to build thread pool, using the global pool");
                    run()
                }
            },
            None => run(),
        }
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for PythonParser {
    fn language(&self) -> &str {
        "python"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".py", ".pyw"]
    }

    #[instrument(skip(self, source), fields(bytes = source.len()))]
    fn parse_source(&self, source: &str, path: &str) -> Result<SourceFile, ParserError> {
        if source.len() > self.config.max_file_size {
            warn!(max = self.config.max_file_size, "source too large");
            return Err(ParserError::FileTooLarge(PathBuf::from(path), source.len()));
        }

        crate::extractor::extract(source, path, &self.config)
    }

    #[instrument(skip(self), fields(file = %path.display()))]
    fn parse_file(&self, path: &Path) -> Result<SourceFile, ParserError> {
        let start = Instant::now();
        let result = self.read_and_parse(path);
        let duration = start.elapsed();
        self.update_metrics(&result, duration);

        match &result {
            Ok(file) => info!(
                functions = file.function_count(),
                entities = file.entity_count(),
                time_us = duration.as_micros() as u64,
                "File parsed successfully"
            ),
            Err(e) => warn!(error = %e, "File parse failed"),
        }

        result
    }

    fn parse_files(&self, paths: &[PathBuf]) -> BatchInfo {
        let start = Instant::now();

        let results: Vec<(PathBuf, ParserResult<SourceFile>)> = if self.config.parallel {
            self.parse_files_parallel(paths)
        } else {
            paths
                .iter()
                .map(|path| (path.clone(), self.parse_file(path)))
                .collect()
        };

        let mut batch = BatchInfo::default();
        for (path, result) in results {
            match result {
                Ok(file) => batch.files.push(file),
                Err(e) => batch.failed_files.push((path, e.to_string())),
            }
        }
        batch.total_parse_time = start.elapsed();

        info!(
            files_parsed = batch.files.len(),
            files_failed = batch.failed_files.len(),
            total_functions = batch.total_functions(),
            total_entities = batch.total_entities(),
            total_time_ms = batch.total_parse_time.as_millis() as u64,
            "Batch parse completed"
        );

        batch
    }

    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn parse_directory(&self, dir: &Path) -> Result<BatchInfo, ParserError> {
        let paths = self.discover_files(dir)?;
        Ok(self.parse_files(&paths))
    }

    fn discover_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ParserError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                // Skip excluded directories, but never the root itself
                if e.depth() > 0 && e.file_type().is_dir() {
                    if let Some(name) = e.file_name().to_str() {
                        return !self.config.should_exclude_dir(name);
                    }
                }
                true
            });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                ParserError::IoError(path, source)
            })?;

            if entry.file_type().is_file() && self.can_parse(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        debug!(dir = %dir.display(), count = files.len(), "discovered Python files");
        Ok(files)
    }

    fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn metrics(&self) -> ParserMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn reset_metrics(&mut self) {
        *self
            .metrics
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = ParserMetrics::default();
    }
}

impl PythonParser {
    fn read_and_parse(&self, path: &Path) -> ParserResult<SourceFile> {
        if !self.can_parse(path) {
            return Err(ParserError::UnsupportedFile(path.to_path_buf()));
        }

        let metadata =
            fs::metadata(path).map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;
        if metadata.len() as usize > self.config.max_file_size {
            return Err(ParserError::FileTooLarge(
                path.to_path_buf(),
                metadata.len() as usize,
            ));
        }

        let source =
            fs::read_to_string(path).map_err(|e| ParserError::IoError(path.to_path_buf(), e))?;
        self.parse_source(&source, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_parser_new() {
        let parser = PythonParser::new();
        assert_eq!(parser.language(), "python");
        assert!(parser.config().tolerant);
    }

    #[test]
    fn test_python_parser_file_extensions() {
        let parser = PythonParser::new();
        let exts = parser.file_extensions();
        assert_eq!(exts.len(), 2);
        assert!(exts.contains(&".py"));
        assert!(exts.contains(&".pyw"));
    }

    #[test]
    fn test_python_parser_can_parse() {
        let parser = PythonParser::new();
        assert!(parser.can_parse(Path::new("test.py")));
        assert!(parser.can_parse(Path::new("test.pyw")));
        assert!(!parser.can_parse(Path::new("test.rs")));
        assert!(!parser.can_parse(Path::new("test.txt")));
    }

    #[test]
    fn test_with_config_validates() {
        let config = ParserConfig::default().with_workers(0);
        assert!(matches!(
            PythonParser::with_config(config),
            Err(ParserError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_metrics_initial_state() {
        let parser = PythonParser::new();
        let metrics = parser.metrics();
        assert_eq!(metrics.files_attempted, 0);
        assert_eq!(metrics.files_succeeded, 0);
        assert_eq!(metrics.files_failed, 0);
    }

    #[test]
    fn test_parse_uses_empty_label() {
        let parser = PythonParser::new();
        let file = parser.parse("x = 1\n").unwrap();
        assert_eq!(file.path, "");
        assert_eq!(file.top_level_attributes, vec!["x = 1"]);
    }

    #[test]
    fn test_source_size_limit() {
        let parser = PythonParser::with_config(ParserConfig::default().with_max_file_size(4)).unwrap();
        let result = parser.parse_source("x = 12345\n", "big.py");
        assert!(matches!(result, Err(ParserError::FileTooLarge(_, 10))));
    }

    #[test]
    fn test_parse_source_does_not_touch_metrics() {
        let parser = PythonParser::new();
        parser.parse_source("def f():\n    pass\n", "f.py").unwrap();
        assert_eq!(parser.metrics().files_attempted, 0);
    }
}
