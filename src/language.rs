//! Language support - shared tree-sitter grammar configuration
//!
//! Single source of truth for grammar selection. Plain TypeScript and
//! TSX are distinct grammars; JSX-bearing JavaScript routes through the
//! TSX grammar, which parses it and carries the markup node kinds the
//! detector needs.

use anyhow::Result;

/// Get the tree-sitter grammar for a given language name.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: typescript, tsx",
            language
        )),
    }
}

/// Detect the language for a file extension.
///
/// Returns the name that can be passed to [`get_tree_sitter_language`].
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "ts" => Some("typescript"),
        "tsx" | "jsx" | "js" => Some("tsx"),
        _ => None,
    }
}
