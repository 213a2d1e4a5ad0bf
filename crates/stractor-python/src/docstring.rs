//! Docstring detection and body splitting
//!
//! A scope's docstring is its first statement when that statement is a bare
//! string literal. Comments before it are skipped; any other statement in
//! first position means the scope has no docstring. Bytes literals and
//! f-strings never count.

use crate::text::{
    cut_range, node_text, non_empty, string_prefix, strip_outer_pair, strip_quotes,
};
use tree_sitter::Node;

/// The docstring expression statement of a module or block, if any
pub fn docstring_statement<'t>(source: &str, scope: Node<'t>) -> Option<Node<'t>> {
    let mut cursor = scope.walk();
    let first = scope
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")?;

    let is_bare_string = first.kind() == "expression_statement"
        && first.named_child_count() == 1
        && first
            .named_child(0)
            .is_some_and(|expr| is_docstring_literal(source, expr));

    is_bare_string.then_some(first)
}

/// A plain `str` literal: no bytes or f-string prefix, no interpolation
fn is_docstring_literal(source: &str, expr: Node) -> bool {
    if expr.kind() != "string" {
        return false;
    }
    let mut cursor = expr.walk();
    let interpolated = expr
        .named_children(&mut cursor)
        .any(|child| child.kind() == "interpolation");
    let prefix = string_prefix(node_text(source, expr));

    !interpolated && !prefix.contains(['b', 'B', 'f', 'F'])
}

/// Quote-stripped, trimmed docstring text; `None` when empty
pub fn clean_docstring(literal: &str) -> Option<String> {
    non_empty(strip_quotes(literal.trim()))
}

/// Docstring of a module or class body
pub fn scope_docstring(source: &str, scope: Node) -> Option<String> {
    docstring_statement(source, scope).and_then(|stmt| clean_docstring(node_text(source, stmt)))
}

/// Split a block into `(documentation, body)`
///
/// The docstring statement's own byte range, plus a `;` that directly
/// follows it, is cut out of the block's text.
/// One outer `{`/`}` pair is then removed if present, and the rest trimmed.
/// A block holding only its docstring yields `body == None`.
pub fn split_docstring_and_body(source: &str, block: Node) -> (Option<String>, Option<String>) {
    let block_text = node_text(source, block);

    let (documentation, body) = match docstring_statement(source, block) {
        Some(stmt) => {
            let stmt_end = stmt
                .next_sibling()
                .filter(|next| next.kind() == ";")
                .map_or(stmt.end_byte(), |semicolon| semicolon.end_byte());
            let start = stmt.start_byte().saturating_sub(block.start_byte());
            let end = stmt_end.saturating_sub(block.start_byte());
            (
                clean_docstring(node_text(source, stmt)),
                cut_range(block_text, start..end),
            )
        }
        None => (None, block_text.to_string()),
    };

    let body = strip_outer_pair(body.trim(), '{', '}');
    (documentation, non_empty(body))
}
