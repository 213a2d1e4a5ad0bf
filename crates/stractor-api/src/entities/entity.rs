use super::function::Function;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a top-level entity
///
/// Only classes are modeled today. New kinds become new variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Class,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a class together with its direct methods
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name
    pub name: String,

    /// Entity kind, serialized as `type`
    #[serde(rename = "type", default)]
    pub kind: EntityKind,

    /// Documentation/docstring
    pub documentation: Option<String>,

    /// Methods in source order
    pub methods: Vec<Function>,

    /// Base class list without the enclosing parentheses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclasses: Option<String>,

    /// Decorators in source order, `@` included
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            documentation: None,
            methods: Vec::new(),
            superclasses: None,
            decorators: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Class)
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_methods(mut self, methods: Vec<Function>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_superclasses(mut self, bases: impl Into<String>) -> Self {
        self.superclasses = Some(bases.into());
        self
    }

    pub fn with_decorators(mut self, decorators: Vec<String>) -> Self {
        self.decorators = decorators;
        self
    }

    /// Look up a method by name (first match in source order)
    pub fn method(&self, name: &str) -> Option<&Function> {
        self.methods.iter().find(|m| m.name == name)
    }
}
