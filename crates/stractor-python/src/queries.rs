//! Structural queries over the Python grammar
//!
//! Every query captures its parent node as `@scope`. Running a query "in" a
//! scope keeps only the matches whose `@scope` is that exact node, so only
//! direct children of the scope are ever reported.

use crate::error::EngineError;
use std::sync::OnceLock;
use tree_sitter::{Language, Node, Query, QueryCursor};

const SCOPE: &str = "scope";

const IMPORTS: &str = r#"
(_
  [
    (import_statement)
    (import_from_statement)
    (future_import_statement)
  ] @import) @scope
"#;

const ATTRIBUTES: &str = r#"
(_
  (expression_statement
    (assignment) @assignment)) @scope
"#;

const FUNCTIONS: &str = r#"
(_
  (function_definition
    name: (identifier) @name
    parameters: (parameters) @parameters
    return_type: (type)? @return_type
    body: (block) @body) @definition) @scope

(_
  (decorated_definition
    definition: (function_definition
      name: (identifier) @name
      parameters: (parameters) @parameters
      return_type: (type)? @return_type
      body: (block) @body) @definition) @decorated) @scope
"#;

const CLASSES: &str = r#"
(_
  (class_definition
    name: (identifier) @name
    superclasses: (argument_list)? @superclasses
    body: (block) @body) @definition) @scope

(_
  (decorated_definition
    definition: (class_definition
      name: (identifier) @name
      superclasses: (argument_list)? @superclasses
      body: (block) @body) @definition) @decorated) @scope
"#;

/// One match, detached from the query cursor
#[derive(Debug, Clone)]
pub struct ScopeMatch<'tree> {
    captures: Vec<(u32, Node<'tree>)>,
}

/// A compiled query restricted to the direct children of one scope
pub struct ScopeQuery {
    query: Query,
    scope: u32,
    anchor: u32,
}

impl ScopeQuery {
    /// Compile `source`; `anchor` names the capture that orders matches
    pub fn new(language: &Language, source: &str, anchor: &str) -> Result<Self, EngineError> {
        let query = Query::new(language, source).map_err(|e| EngineError::Query(e.to_string()))?;
        let index = |name: &str| {
            query
                .capture_index_for_name(name)
                .ok_or_else(|| EngineError::Query(format!("missing @{name} capture")))
        };
        let scope = index(SCOPE)?;
        let anchor = index(anchor)?;

        Ok(Self {
            query,
            scope,
            anchor,
        })
    }

    /// All matches whose `@scope` is `scope`, in source order
    pub fn matches_in<'tree>(&self, scope: Node<'tree>, source: &[u8]) -> Vec<ScopeMatch<'tree>> {
        let mut cursor = QueryCursor::new();
        let mut found: Vec<ScopeMatch<'tree>> = cursor
            .matches(&self.query, scope, source)
            .filter(|m| {
                m.nodes_for_capture_index(self.scope)
                    .any(|node| node.id() == scope.id())
            })
            .map(|m| ScopeMatch {
                captures: m.captures.iter().map(|c| (c.index, c.node)).collect(),
            })
            .collect();

        found.sort_by_key(|m| m.node(self.anchor).map_or(0, |n| n.start_byte()));
        found
    }

    /// First node bound to `name` in a match
    pub fn capture<'tree>(&self, m: &ScopeMatch<'tree>, name: &str) -> Option<Node<'tree>> {
        self.query
            .capture_index_for_name(name)
            .and_then(|index| m.node(index))
    }
}

impl<'tree> ScopeMatch<'tree> {
    fn node(&self, index: u32) -> Option<Node<'tree>> {
        self.captures
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, node)| *node)
    }
}

/// The compiled query set for the Python grammar
pub struct PythonQueries {
    pub imports: ScopeQuery,
    pub attributes: ScopeQuery,
    pub functions: ScopeQuery,
    pub classes: ScopeQuery,
}

static QUERIES: OnceLock<Result<PythonQueries, String>> = OnceLock::new();

impl PythonQueries {
    /// Compile every query against `language`
    pub fn compile(language: &Language) -> Result<Self, EngineError> {
        Ok(Self {
            imports: ScopeQuery::new(language, IMPORTS, "import")?,
            attributes: ScopeQuery::new(language, ATTRIBUTES, "assignment")?,
            functions: ScopeQuery::new(language, FUNCTIONS, "definition")?,
            classes: ScopeQuery::new(language, CLASSES, "definition")?,
        })
    }

    /// Process-wide query set, compiled on first use
    pub fn shared() -> Result<&'static PythonQueries, EngineError> {
        QUERIES
            .get_or_init(|| {
                Self::compile(&tree_sitter_python::language()).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|message| EngineError::Query(message.clone()))
    }
}
