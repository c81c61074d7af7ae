//! Syntax tree model and classification
//!
//! This module owns everything the extraction heuristics know about parsed
//! source: the typed statement/member/type model (`tree`), the per-session
//! node-kind catalog resolved from the grammar (`catalog`), and the pure
//! classification helpers shared by the detector and prop extractor
//! (`classify`).

pub mod catalog;
pub mod classify;
pub mod tree;

pub use catalog::{CatalogError, SyntaxCatalog};
pub use tree::{
    Block, ClassDecl, ExportAssignment, Expression, FunctionDecl, HeritageClause, HeritageType,
    ImportBinding, ImportDecl, InterfaceDecl, LiteralKind, LiteralValue, MarkupKind, Member,
    MemberKind, Modifier, ObjectLiteral, Parameter, Primitive, PropertyAssignment, SourceFile,
    Statement, TypeReference,
};
