//! Type-annotation conversion
//!
//! Maps the grammar's type nodes onto [`TypeReference`]. Unions are
//! flattened (the grammar nests `A | B | C` as binary nodes), literal
//! types keep their unquoted text plus literal class, and `null` /
//! `undefined` literals act as keyword types. Anything outside the
//! modeled shapes becomes `TypeReference::Unknown`.

use tree_sitter::Node;

use crate::syntax::catalog::SyntaxCatalog;
use crate::syntax::tree::{LiteralKind, Parameter, Primitive, TypeReference};

use super::helpers;

/// The type inside a `: type` annotation node, if any.
pub(crate) fn type_from_annotation(
    annotation: Option<Node>,
    catalog: &SyntaxCatalog,
    source: &str,
) -> Option<TypeReference> {
    let annotation = annotation?;
    let inner = helpers::first_named_child(&annotation, catalog)?;
    Some(convert_type(&inner, catalog, source))
}

pub(crate) fn convert_type(node: &Node, catalog: &SyntaxCatalog, source: &str) -> TypeReference {
    if catalog.is_predefined_type(node) {
        let text = helpers::node_text(node, source);
        return match Primitive::from_keyword(&text) {
            Some(primitive) => TypeReference::Primitive(primitive),
            // `object`, `symbol`, `unknown` flow through by name.
            None => TypeReference::Named { name: text },
        };
    }

    if catalog.is_named_type(node) {
        let name = node
            .child_by_field_name("name")
            .map(|n| helpers::node_text(&n, source))
            .unwrap_or_else(|| helpers::node_text(node, source));
        return TypeReference::Named { name };
    }

    if catalog.is_union_type(node) {
        let mut branches = Vec::new();
        flatten_union(node, catalog, source, &mut branches);
        return TypeReference::Union { branches };
    }

    if catalog.is_function_type(node) {
        return convert_function_type(node, catalog, source);
    }

    if catalog.is_literal_type(node) {
        return convert_literal_type(node, catalog, source);
    }

    if catalog.is_parenthesized_type(node) {
        return match helpers::first_named_child(node, catalog) {
            Some(inner) => convert_type(&inner, catalog, source),
            None => TypeReference::Unknown,
        };
    }

    TypeReference::Unknown
}

/// Parameters of a `formal_parameters` node, in declaration order.
pub(crate) fn convert_parameters(
    node: &Node,
    catalog: &SyntaxCatalog,
    source: &str,
) -> Vec<Parameter> {
    let mut parameters = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if !catalog.is_parameter(&child) {
            continue;
        }
        let name = child
            .child_by_field_name("pattern")
            .map(|n| helpers::node_text(&n, source))
            .unwrap_or_default();
        let annotation = child.child_by_field_name("type").or_else(|| {
            let mut param_cursor = child.walk();
            let annotation = child
                .named_children(&mut param_cursor)
                .find(|n| catalog.is_type_annotation(n));
            annotation
        });
        let type_ref = type_from_annotation(annotation, catalog, source);
        parameters.push(Parameter { name, type_ref });
    }
    parameters
}

fn flatten_union(
    node: &Node,
    catalog: &SyntaxCatalog,
    source: &str,
    branches: &mut Vec<TypeReference>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if catalog.is_comment(&child) {
            continue;
        }
        if catalog.is_union_type(&child) {
            flatten_union(&child, catalog, source, branches);
        } else {
            branches.push(convert_type(&child, catalog, source));
        }
    }
}

fn convert_function_type(node: &Node, catalog: &SyntaxCatalog, source: &str) -> TypeReference {
    let params_node = node.child_by_field_name("parameters").or_else(|| {
        let mut cursor = node.walk();
        let params = node
            .named_children(&mut cursor)
            .find(|child| catalog.is_formal_parameters(child));
        params
    });
    let parameters = params_node
        .map(|n| convert_parameters(&n, catalog, source))
        .unwrap_or_default();

    let return_node = node.child_by_field_name("return_type").or_else(|| {
        // The type after `=>` is the last named child that is not the
        // parameter list.
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| !catalog.is_comment(child) && !catalog.is_formal_parameters(child))
            .last()
    });
    let return_type = return_node.map(|n| Box::new(convert_type(&n, catalog, source)));

    TypeReference::Function {
        parameters,
        return_type,
    }
}

fn convert_literal_type(node: &Node, catalog: &SyntaxCatalog, source: &str) -> TypeReference {
    let Some(inner) = helpers::first_named_child(node, catalog) else {
        return TypeReference::Unknown;
    };
    let id = inner.kind_id();

    if id == catalog.string {
        return TypeReference::Literal {
            text: helpers::string_text(&inner, source),
            kind: LiteralKind::String,
        };
    }
    if id == catalog.number {
        return TypeReference::Literal {
            text: helpers::node_text(&inner, source),
            kind: LiteralKind::Number,
        };
    }
    if id == catalog.true_keyword || id == catalog.false_keyword {
        return TypeReference::Literal {
            text: helpers::node_text(&inner, source),
            kind: LiteralKind::Boolean,
        };
    }
    if id == catalog.null_keyword {
        return TypeReference::Primitive(Primitive::Null);
    }
    if id == catalog.undefined_keyword {
        return TypeReference::Primitive(Primitive::Undefined);
    }

    TypeReference::Unknown
}
