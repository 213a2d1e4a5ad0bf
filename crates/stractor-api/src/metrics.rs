use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected during parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserMetrics {
    /// Total files attempted to parse
    pub files_attempted: usize,

    /// Files successfully parsed
    pub files_succeeded: usize,

    /// Files that failed parsing
    pub files_failed: usize,

    /// Total time spent parsing
    #[serde(with = "duration_serde")]
    pub total_parse_time: Duration,

    /// Top-level functions plus methods extracted
    pub total_functions: usize,

    /// Entities (classes) extracted
    pub total_entities: usize,
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

impl ParserMetrics {
    /// Record one attempted file
    pub fn record(&mut self, success: bool, duration: Duration, functions: usize, entities: usize) {
        self.files_attempted += 1;
        if success {
            self.files_succeeded += 1;
        } else {
            self.files_failed += 1;
        }
        self.total_parse_time += duration;
        self.total_functions += functions;
        self.total_entities += entities;
    }

    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.files_attempted == 0 {
            0.0
        } else {
            self.files_succeeded as f64 / self.files_attempted as f64
        }
    }

    /// Average parse time per attempted file
    ///
    /// `total_parse_time` includes failed files, so they count here too.
    pub fn avg_parse_time(&self) -> Duration {
        if self.files_attempted == 0 {
            Duration::ZERO
        } else {
            self.total_parse_time / u32::try_from(self.files_attempted).unwrap_or(u32::MAX)
        }
    }

    /// Merge another metrics object into this one
    pub fn merge(&mut self, other: &ParserMetrics) {
        self.files_attempted += other.files_attempted;
        self.files_succeeded += other.files_succeeded;
        self.files_failed += other.files_failed;
        self.total_parse_time += other.total_parse_time;
        self.total_functions += other.total_functions;
        self.total_entities += other.total_entities;
    }
}
