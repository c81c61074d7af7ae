//! Small node helpers shared across the conversion modules.

use tree_sitter::Node;

use crate::syntax::catalog::SyntaxCatalog;

/// Text of a node, sliced out of the source with UTF-8 boundary safety.
pub(crate) fn node_text(node: &Node, source: &str) -> String {
    let bytes = source.as_bytes();
    let start = node.start_byte();
    let end = node.end_byte();
    if start < bytes.len() && end <= bytes.len() {
        String::from_utf8_lossy(&bytes[start..end]).to_string()
    } else {
        String::new()
    }
}

/// Text of a string literal node with the surrounding quotes removed.
pub(crate) fn string_text(node: &Node, source: &str) -> String {
    node_text(node, source)
        .trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string()
}

/// Whether a node carries a lexical token child of the given kind.
/// Used for `static`, `default`, and the optional marker `?`; token
/// names are the stable surface across grammar versions.
pub(crate) fn has_child_token(node: &Node, token: &str) -> bool {
    node.children(&mut node.walk())
        .any(|child| child.kind() == token)
}

/// First named child that is not a comment.
pub(crate) fn first_named_child<'tree>(
    node: &Node<'tree>,
    catalog: &SyntaxCatalog,
) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .find(|child| !catalog.is_comment(child));
    result
}
