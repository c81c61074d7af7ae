//! Pure classification helpers over the typed syntax model
//!
//! The canonical type names returned by [`resolve_type`] are contracts the
//! prop extractor and downstream consumers depend on: case-sensitive and
//! exact. Everything here is a pure function over immutable tree data.

use crate::syntax::tree::{
    Expression, LiteralKind, Member, Primitive, Statement, TypeReference,
};

/// Sentinel returned for every type that has no canonical name.
pub const UNKNOWN_TYPE: &str = "$unknown";

/// Map a type reference to its canonical name: `number`, `string`,
/// `boolean`, `void`, `any`, `null`, `undefined`, `never`, or `Function`.
/// Anything else, including absent input, resolves to [`UNKNOWN_TYPE`].
pub fn resolve_type(type_ref: Option<&TypeReference>) -> &'static str {
    match type_ref {
        Some(TypeReference::Primitive(primitive)) => match primitive {
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Boolean => "boolean",
            Primitive::Void => "void",
            Primitive::Any => "any",
            Primitive::Null => "null",
            Primitive::Undefined => "undefined",
            Primitive::Never => "never",
        },
        Some(TypeReference::Function { .. }) => "Function",
        _ => UNKNOWN_TYPE,
    }
}

pub fn is_unknown_type(resolved: &str) -> bool {
    resolved == UNKNOWN_TYPE
}

/// Canonical name of the primitive class a literal belongs to, used for
/// union branches such as `"left" | "right"` or `0 | 1`.
pub fn resolve_literal(kind: LiteralKind) -> &'static str {
    match kind {
        LiteralKind::String => "string",
        LiteralKind::Number => "number",
        LiteralKind::Boolean => "boolean",
    }
}

/// Join the documentation comments attached to a node: empty for none,
/// the single text for one, newline-joined in encounter order otherwise.
pub fn join_doc_comments(docs: &[String]) -> String {
    docs.join("\n")
}

/// True iff the statement is a class declaration with a member that is a
/// method (ordinary or arrow-function-valued) of the given name.
pub fn has_method_named(statement: &Statement, name: &str) -> bool {
    let Statement::Class(class) = statement else {
        return false;
    };
    class
        .members
        .iter()
        .any(|member: &Member| member.is_method() && member.name == name)
}

/// A markup element or fragment, directly or wrapped in any depth of
/// parentheses.
pub fn is_markup_expression(expression: &Expression) -> bool {
    match expression {
        Expression::Markup(_) => true,
        Expression::Parenthesized(inner) => is_markup_expression(inner),
        _ => false,
    }
}
