//! Parser adapter
//!
//! The only layer that touches raw tree-sitter nodes. A [`ParseSession`]
//! owns one grammar, one parser, and the node-kind catalog resolved from
//! that grammar at session start; `parse` turns source text into the
//! typed [`SourceFile`] model the extraction heuristics consume.
//!
//! All calls into one session must come from one logical thread of
//! control; the session's parser is its only mutable state.

mod convert;
mod doc;
mod helpers;
mod members;
mod types;

use anyhow::Result;
use tree_sitter::Parser;

use crate::syntax::catalog::SyntaxCatalog;
use crate::syntax::tree::SourceFile;

/// One parsing session: grammar + parser + resolved kind catalog.
pub struct ParseSession {
    language: String,
    parser: Parser,
    catalog: SyntaxCatalog,
}

impl ParseSession {
    /// Build a session for a language name understood by
    /// [`crate::language::get_tree_sitter_language`]. Catalog resolution
    /// failures are fatal: they mean the grammar cannot support the
    /// extraction heuristics at all.
    pub fn new(language: &str) -> Result<Self> {
        let ts_language = crate::language::get_tree_sitter_language(language)?;
        let catalog = SyntaxCatalog::resolve(&ts_language)?;

        let mut parser = Parser::new();
        parser.set_language(&ts_language).map_err(|e| {
            anyhow::anyhow!("failed to set parser language for {}: {}", language, e)
        })?;

        Ok(Self {
            language: language.to_string(),
            parser,
            catalog,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn catalog(&self) -> &SyntaxCatalog {
        &self.catalog
    }

    /// Parse source text into the typed model. Unparseable input yields
    /// an empty file (zero statements) rather than an error; extraction
    /// over an empty file produces zero components.
    pub fn parse(&mut self, content: &str) -> SourceFile {
        match self.parser.parse(content, None) {
            Some(tree) => convert::source_file(tree.root_node(), &self.catalog, content),
            None => {
                tracing::warn!(language = %self.language, "parser returned no tree; treating file as empty");
                SourceFile::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tree::Statement;

    #[test]
    fn test_empty_source_yields_empty_file() {
        let mut session = ParseSession::new("tsx").unwrap();
        let file = session.parse("");
        assert!(file.statements.is_empty());
    }

    #[test]
    fn test_session_is_reusable_across_files() {
        let mut session = ParseSession::new("tsx").unwrap();
        let a = session.parse("class A {}");
        let b = session.parse("function b() {}");
        assert!(matches!(a.statements[0], Statement::Class(_)));
        assert!(matches!(b.statements[0], Statement::Function(_)));
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        assert!(ParseSession::new("cobol").is_err());
    }
}
