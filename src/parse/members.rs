//! Class and interface member conversion
//!
//! Class bodies yield methods, arrow-function-valued fields, and plain
//! fields (whose object-literal initializers are kept for default-value
//! harvesting). Interface bodies yield property and method signatures
//! with their optional markers and doc comments.

use tree_sitter::Node;

use crate::syntax::catalog::SyntaxCatalog;
use crate::syntax::tree::{
    LiteralValue, Member, MemberKind, Modifier, ObjectLiteral, PropertyAssignment,
};

use super::{doc, helpers, types};

pub(crate) fn class_members(body: &Node, catalog: &SyntaxCatalog, source: &str) -> Vec<Member> {
    let mut members = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        if catalog.is_method_definition(&child) {
            members.push(method_member(&child, catalog, source));
        } else if catalog.is_field_definition(&child) {
            members.push(field_member(&child, catalog, source));
        }
    }
    members
}

pub(crate) fn interface_members(body: &Node, catalog: &SyntaxCatalog, source: &str) -> Vec<Member> {
    let mut members = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        if catalog.is_property_signature(&child) {
            members.push(Member {
                name: member_name(&child, catalog, source),
                kind: MemberKind::Property,
                type_ref: types::type_from_annotation(
                    child.child_by_field_name("type"),
                    catalog,
                    source,
                ),
                optional: helpers::has_child_token(&child, "?"),
                modifiers: member_modifiers(&child),
                initializer: None,
                doc: doc::doc_comments_before(&child, catalog, source),
            });
        } else if catalog.is_method_definition(&child) {
            members.push(method_member(&child, catalog, source));
        }
    }
    members
}

fn method_member(node: &Node, catalog: &SyntaxCatalog, source: &str) -> Member {
    Member {
        name: member_name(node, catalog, source),
        kind: MemberKind::Method,
        type_ref: None,
        optional: helpers::has_child_token(node, "?"),
        modifiers: member_modifiers(node),
        initializer: None,
        doc: doc::doc_comments_before(node, catalog, source),
    }
}

fn field_member(node: &Node, catalog: &SyntaxCatalog, source: &str) -> Member {
    let value = node.child_by_field_name("value");

    // A field holding an arrow function behaves like a method.
    let kind = match &value {
        Some(v) if catalog.is_function_valued(v) => MemberKind::ArrowMethod,
        _ => MemberKind::Property,
    };

    let initializer = value
        .filter(|v| catalog.is_object_literal(v))
        .map(|v| object_literal(&v, catalog, source));

    Member {
        name: member_name(node, catalog, source),
        kind,
        type_ref: types::type_from_annotation(node.child_by_field_name("type"), catalog, source),
        optional: helpers::has_child_token(node, "?"),
        modifiers: member_modifiers(node),
        initializer,
        doc: doc::doc_comments_before(node, catalog, source),
    }
}

fn member_name(node: &Node, catalog: &SyntaxCatalog, source: &str) -> String {
    let name_node = node
        .child_by_field_name("name")
        .or_else(|| node.child_by_field_name("property"))
        .or_else(|| node.child_by_field_name("key"));
    match name_node {
        Some(n) if catalog.is_string_literal(&n) => helpers::string_text(&n, source),
        Some(n) => helpers::node_text(&n, source),
        None => String::new(),
    }
}

fn member_modifiers(node: &Node) -> Vec<Modifier> {
    let mut modifiers = Vec::new();
    if helpers::has_child_token(node, "static") {
        modifiers.push(Modifier::Static);
    }
    if helpers::has_child_token(node, "readonly") {
        modifiers.push(Modifier::Readonly);
    }
    if helpers::has_child_token(node, "abstract") {
        modifiers.push(Modifier::Abstract);
    }
    modifiers
}

/// Reduce an object literal to its name/value assignments. Only pairs
/// with usable literal shapes produce a value; everything else degrades
/// to `LiteralValue::Other`.
pub(crate) fn object_literal(node: &Node, catalog: &SyntaxCatalog, source: &str) -> ObjectLiteral {
    let mut properties = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if !catalog.is_pair(&child) {
            continue;
        }
        let Some(key) = child.child_by_field_name("key") else {
            continue;
        };
        let name = if catalog.is_string_literal(&key) {
            helpers::string_text(&key, source)
        } else {
            helpers::node_text(&key, source)
        };
        let value = match child.child_by_field_name("value") {
            Some(v) => literal_value(&v, catalog, source),
            None => LiteralValue::Other,
        };
        properties.push(PropertyAssignment { name, value });
    }
    ObjectLiteral { properties }
}

fn literal_value(node: &Node, catalog: &SyntaxCatalog, source: &str) -> LiteralValue {
    let id = node.kind_id();
    if id == catalog.true_keyword {
        LiteralValue::True
    } else if id == catalog.false_keyword {
        LiteralValue::False
    } else if id == catalog.null_keyword {
        LiteralValue::Null
    } else if id == catalog.string {
        LiteralValue::String(helpers::string_text(node, source))
    } else if id == catalog.number {
        LiteralValue::Number(helpers::node_text(node, source))
    } else if id == catalog.identifier {
        LiteralValue::Identifier(helpers::node_text(node, source))
    } else if id == catalog.undefined_keyword {
        // `undefined` reads like a bare identifier in value position.
        LiteralValue::Identifier(helpers::node_text(node, source))
    } else {
        LiteralValue::Other
    }
}
