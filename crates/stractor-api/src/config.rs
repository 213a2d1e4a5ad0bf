use crate::errors::ParserError;
use serde::{Deserialize, Serialize};

/// Configuration for parser behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum file size to parse (in bytes)
    /// Files larger than this are rejected
    pub max_file_size: usize,

    /// Extract an outline even when the tree contains syntax errors
    pub tolerant: bool,

    /// Enable parallel parsing (for `parse_files`)
    pub parallel: bool,

    /// Number of parallel workers (None = rayon default)
    pub parallel_workers: Option<usize>,

    /// Directories skipped by `parse_directory`
    pub exclude_dirs: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10 MB
            tolerant: true,
            parallel: false,
            parallel_workers: None,
            exclude_dirs: vec![
                "__pycache__".to_string(),
                ".git".to_string(),
                ".venv".to_string(),
                "venv".to_string(),
                "env".to_string(),
                ".tox".to_string(),
                "dist".to_string(),
                "build".to_string(),
                "*.egg-info".to_string(),
            ],
        }
    }
}

impl ParserConfig {
    /// Reject trees that contain syntax errors
    pub fn strict() -> Self {
        Self {
            tolerant: false,
            ..Default::default()
        }
    }

    /// Enable parallel parsing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker count used when parallel parsing is enabled
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ParserError> {
        if self.parallel_workers == Some(0) {
            return Err(ParserError::InvalidConfig(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.max_file_size == 0 {
            return Err(ParserError::InvalidConfig(
                "max_file_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if a directory should be excluded
    pub fn should_exclude_dir(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|excluded| {
            // Handle glob patterns like *.egg-info
            if excluded.contains('*') {
                let pattern = excluded.replace('*', "");
                dir_name.contains(&pattern)
            } else {
                dir_name == excluded
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert!(config.tolerant);
        assert!(!config.parallel);
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = ParserConfig::strict();
        assert!(!config.tolerant);
        assert_eq!(config.exclude_dirs, ParserConfig::default().exclude_dirs);
    }

    #[test]
    fn test_validate() {
        let mut config = ParserConfig::default().with_workers(0);
        assert!(matches!(
            config.validate(),
            Err(ParserError::InvalidConfig(_))
        ));

        config.parallel_workers = Some(4);
        assert!(config.validate().is_ok());

        let config = ParserConfig::default().with_max_file_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_should_exclude_dir() {
        let config = ParserConfig::default();
        assert!(config.should_exclude_dir("__pycache__"));
        assert!(config.should_exclude_dir(".venv"));
        assert!(config.should_exclude_dir("mypackage.egg-info"));
        assert!(!config.should_exclude_dir("src"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{"parallel": true}"#).unwrap();
        assert!(config.parallel);
        assert!(config.tolerant);
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
    }
}
