//! Doc-comment harvesting
//!
//! Documentation is collected from the JSDoc blocks immediately preceding
//! a declaration (or a member inside a class/interface body) and reduced
//! to the comment text: the `/** */` frame and per-line leading asterisks
//! are stripped. Plain `//` and `/* */` comments are not documentation
//! and end the walk.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use crate::syntax::catalog::SyntaxCatalog;

use super::helpers;

static LEADING_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\*+\s?").unwrap());

/// Cleaned JSDoc texts preceding `node`, in source order.
pub(crate) fn doc_comments_before(
    node: &Node,
    catalog: &SyntaxCatalog,
    source: &str,
) -> Vec<String> {
    let mut comments = Vec::new();
    let mut current = node.prev_named_sibling();
    while let Some(sibling) = current {
        if !catalog.is_comment(&sibling) {
            break;
        }
        let text = helpers::node_text(&sibling, source);
        if !text.trim_start().starts_with("/**") {
            // Stop at non-doc comment
            break;
        }
        comments.push(clean_jsdoc(&text));
        current = sibling.prev_named_sibling();
    }

    // Reverse to get original order (top to bottom)
    comments.reverse();
    comments
}

/// Strip the JSDoc frame from a comment and return its text content.
pub(crate) fn clean_jsdoc(text: &str) -> String {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix("/**").unwrap_or(trimmed);
    let body = body.strip_suffix("*/").unwrap_or(body);

    let lines: Vec<String> = body
        .lines()
        .map(|line| LEADING_STARS.replace(line, "").trim().to_string())
        .collect();

    let start = lines.iter().position(|l| !l.is_empty());
    let Some(start) = start else {
        return String::new();
    };
    let end = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(start) + 1;
    lines[start..end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_single_line_block() {
        assert_eq!(clean_jsdoc("/** Renders a button */"), "Renders a button");
    }

    #[test]
    fn test_clean_multi_line_block() {
        let comment = "/**\n * This is a hello world component\n */";
        assert_eq!(clean_jsdoc(comment), "This is a hello world component");
    }

    #[test]
    fn test_clean_preserves_interior_blank_lines() {
        let comment = "/**\n * First paragraph.\n *\n * Second paragraph.\n */";
        assert_eq!(clean_jsdoc(comment), "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_clean_empty_block() {
        assert_eq!(clean_jsdoc("/** */"), "");
        assert_eq!(clean_jsdoc("/**\n *\n */"), "");
    }
}
