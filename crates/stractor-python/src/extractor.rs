//! Outline extraction for Python source code
//!
//! Each extractor runs one structural query over one scope and returns its
//! records in source order. The extractors share nothing but the source text
//! and the compiled queries.

use crate::docstring::{scope_docstring, split_docstring_and_body};
use crate::error::EngineError;
use crate::queries::{PythonQueries, ScopeMatch, ScopeQuery};
use crate::text::{node_text, non_empty, strip_outer_pair};
use std::path::PathBuf;
use stractor_api::{Entity, EntityKind, Function, ParserConfig, ParserError, SourceFile};
use tracing::{debug, warn};
use tree_sitter::{Node, Parser, Tree};

/// Extract the outline of one Python source text
///
/// Trees with syntax errors are accepted unless `config.tolerant` is off.
pub fn extract(source: &str, path: &str, config: &ParserConfig) -> Result<SourceFile, ParserError> {
    let queries = PythonQueries::shared().map_err(|e| e.at(path))?;
    let tree = parse_tree(source).map_err(|e| e.at(path))?;
    let root = tree.root_node();

    if root.has_error() {
        let (line, column, message) = describe_first_error(root);
        if !config.tolerant {
            return Err(ParserError::SyntaxError(
                PathBuf::from(path),
                line,
                column,
                message,
            ));
        }
        warn!(path, line, column, %message, "syntax error in source, extracting outline anyway");
    }

    let outline = Outline { source, queries };
    let file = SourceFile {
        path: path.to_string(),
        documentation: outline.module_documentation(root),
        imports: outline.imports(root),
        top_level_attributes: outline.attributes(root),
        top_level_functions: outline.functions(root),
        entities: outline.entities(root),
    };

    debug!(
        path,
        imports = file.imports.len(),
        attributes = file.top_level_attributes.len(),
        functions = file.top_level_functions.len(),
        entities = file.entities.len(),
        methods = file.method_count(),
        "outline extracted"
    );

    Ok(file)
}

fn parse_tree(source: &str) -> Result<Tree, EngineError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_python::language())?;
    parser.parse(source, None).ok_or(EngineError::NoTree)
}

/// 1-based position and description of the first error or missing node
fn describe_first_error(root: Node) -> (usize, usize, String) {
    match first_error(root) {
        Some(node) => {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                "unexpected input".to_string()
            };
            (pos.row + 1, pos.column + 1, message)
        }
        None => (1, 1, "syntax error".to_string()),
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

/// Extractors over one parsed source
struct Outline<'a> {
    source: &'a str,
    queries: &'a PythonQueries,
}

impl<'a> Outline<'a> {
    fn text(&self, node: Node) -> String {
        node_text(self.source, node).to_string()
    }

    fn module_documentation(&self, root: Node) -> Option<String> {
        scope_docstring(self.source, root)
    }

    fn imports(&self, root: Node) -> Vec<String> {
        self.verbatim(&self.queries.imports, root, "import")
    }

    fn attributes(&self, root: Node) -> Vec<String> {
        self.verbatim(&self.queries.attributes, root, "assignment")
    }

    /// Verbatim text of one capture per match
    fn verbatim(&self, query: &ScopeQuery, scope: Node, capture: &str) -> Vec<String> {
        query
            .matches_in(scope, self.source.as_bytes())
            .iter()
            .filter_map(|m| query.capture(m, capture))
            .map(|node| self.text(node))
            .collect()
    }

    /// Functions defined directly in `scope` (module or class body)
    fn functions(&self, scope: Node) -> Vec<Function> {
        let query = &self.queries.functions;
        query
            .matches_in(scope, self.source.as_bytes())
            .iter()
            .filter_map(|m| self.function(query, m))
            .collect()
    }

    fn function(&self, query: &ScopeQuery, m: &ScopeMatch) -> Option<Function> {
        let name = query.capture(m, "name")?;
        let definition = query.capture(m, "definition")?;

        let parameters = query
            .capture(m, "parameters")
            .map(|node| strip_outer_pair(node_text(self.source, node), '(', ')').to_string())
            .unwrap_or_default();
        let return_type = query
            .capture(m, "return_type")
            .and_then(|node| non_empty(node_text(self.source, node)));
        let (documentation, body) = query
            .capture(m, "body")
            .map(|block| split_docstring_and_body(self.source, block))
            .unwrap_or((None, None));

        Some(Function {
            name: self.text(name),
            parameters,
            return_type,
            documentation,
            body,
            decorators: self.decorators(query.capture(m, "decorated")),
            is_async: definition
                .child(0)
                .is_some_and(|keyword| keyword.kind() == "async"),
        })
    }

    /// Classes defined directly in the module, each with its methods
    fn entities(&self, root: Node) -> Vec<Entity> {
        let query = &self.queries.classes;
        query
            .matches_in(root, self.source.as_bytes())
            .iter()
            .filter_map(|m| self.entity(query, m))
            .collect()
    }

    fn entity(&self, query: &ScopeQuery, m: &ScopeMatch) -> Option<Entity> {
        let name = query.capture(m, "name")?;
        let body = query.capture(m, "body")?;

        Some(Entity {
            name: self.text(name),
            kind: EntityKind::Class,
            documentation: scope_docstring(self.source, body),
            methods: self.functions(body),
            superclasses: query.capture(m, "superclasses").and_then(|node| {
                non_empty(strip_outer_pair(node_text(self.source, node), '(', ')'))
            }),
            decorators: self.decorators(query.capture(m, "decorated")),
        })
    }

    fn decorators(&self, decorated: Option<Node>) -> Vec<String> {
        let Some(decorated) = decorated else {
            return Vec::new();
        };
        let mut cursor = decorated.walk();
        decorated
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "decorator")
            .map(|child| node_text(self.source, child).trim().to_string())
            .collect()
    }
}
