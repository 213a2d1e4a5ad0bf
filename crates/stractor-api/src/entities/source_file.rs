use super::{entity::Entity, function::Function};
use serde::{Deserialize, Serialize};

/// Outline of one source file
///
/// Built once per parse and owned by the caller. Holds no references into the
/// syntax tree it was extracted from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Opaque label supplied by the caller
    pub path: String,

    /// Module docstring
    pub documentation: Option<String>,

    /// Import statements, verbatim
    #[serde(default)]
    pub imports: Vec<String>,

    /// Module-level assignments, verbatim
    #[serde(default)]
    pub top_level_attributes: Vec<String>,

    /// Module-level functions
    pub top_level_functions: Vec<Function>,

    /// Classes and their methods
    pub entities: Vec<Entity>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Number of top-level functions plus all methods
    pub fn function_count(&self) -> usize {
        self.top_level_functions.len() + self.method_count()
    }

    /// Number of methods across all entities
    pub fn method_count(&self) -> usize {
        self.entities.iter().map(|e| e.methods.len()).sum()
    }

    /// Number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Look up a top-level function by name
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.top_level_functions.iter().find(|f| f.name == name)
    }

    /// Look up an entity by name
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON produced by [`SourceFile::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
