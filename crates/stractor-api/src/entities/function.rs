use serde::{Deserialize, Serialize};

/// A function or method outline
///
/// Every text field is a verbatim slice of the parsed source, apart from
/// the delimiter stripping and trimming applied during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Function {
    /// Function name
    pub name: String,

    /// Parameter list without the enclosing parentheses (empty if none)
    pub parameters: String,

    /// Return type annotation (if available)
    pub return_type: Option<String>,

    /// Docstring with quotes and outer whitespace removed
    pub documentation: Option<String>,

    /// Body statements with the docstring removed
    pub body: Option<String>,

    /// Decorators in source order, `@` included
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<String>,

    /// Is this an async/coroutine function?
    #[serde(default)]
    pub is_async: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: String::new(),
            return_type: None,
            documentation: None,
            body: None,
            decorators: Vec::new(),
            is_async: false,
        }
    }

    // Builder methods
    pub fn with_parameters(mut self, params: impl Into<String>) -> Self {
        self.parameters = params.into();
        self
    }

    pub fn with_return_type(mut self, ret: impl Into<String>) -> Self {
        self.return_type = Some(ret.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_decorators(mut self, decorators: Vec<String>) -> Self {
        self.decorators = decorators;
        self
    }

    pub fn async_fn(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Header line as it would read in source, e.g. `chat(self) -> str`
    pub fn signature(&self) -> String {
        match &self.return_type {
            Some(ret) => format!("{}({}) -> {}", self.name, self.parameters, ret),
            None => format!("{}({})", self.name, self.parameters),
        }
    }
}
