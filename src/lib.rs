// Propdoc - tree-sitter extraction of React component documentation
//
// Parses TypeScript/TSX sources, converts them into a small typed syntax
// model, and walks that model with pattern-matching heuristics to decide
// which declarations are UI components and what their prop schemas are.
// Scanning folders, loading configuration, and serializing or serving
// the result are caller concerns.

// Grammar selection shared by every parse session
pub mod language;

// Typed syntax model, kind catalog, and classification helpers
pub mod syntax;

// Parser adapter: tree-sitter CST -> typed model
pub mod parse;

// Component detection and prop schema extraction
pub mod extractors;

pub use extractors::{
    extract_components, Component, ComponentType, ExtractorManager, ParamDef, PropDef,
    PROP_TYPE_ENUM, PROP_TYPE_FUNCTION,
};
pub use parse::ParseSession;
pub use syntax::{CatalogError, SyntaxCatalog};
