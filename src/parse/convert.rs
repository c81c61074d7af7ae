//! Statement-level CST conversion
//!
//! Routes each top-level node by kind into the typed model. Export
//! wrappers are unwrapped into modifier lists on the declaration they
//! carry; standalone export statements become [`ExportAssignment`]s so
//! the detector can resolve indirectly-exported names.

use tree_sitter::Node;

use crate::syntax::catalog::SyntaxCatalog;
use crate::syntax::tree::{
    Block, ClassDecl, ExportAssignment, Expression, FunctionDecl, HeritageClause, HeritageType,
    ImportBinding, ImportDecl, InterfaceDecl, MarkupKind, Modifier, SourceFile, Statement,
    TypeReference,
};

use super::{doc, helpers, members, types};

pub(crate) fn source_file(root: Node, catalog: &SyntaxCatalog, source: &str) -> SourceFile {
    SourceFile::new(block_statements(&root, catalog, source))
}

fn block_statements(node: &Node, catalog: &SyntaxCatalog, source: &str) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(statement) = convert_statement(&child, catalog, source) {
            statements.push(statement);
        }
    }
    statements
}

fn convert_statement(node: &Node, catalog: &SyntaxCatalog, source: &str) -> Option<Statement> {
    if catalog.is_comment(node) {
        return None;
    }

    if catalog.is_import_declaration(node) {
        return Some(Statement::Import(import_decl(node, catalog, source)));
    }
    if catalog.is_export_statement(node) {
        return Some(export_statement(node, catalog, source));
    }
    if catalog.is_class_declaration(node) {
        return Some(Statement::Class(class_decl(
            node,
            node,
            Vec::new(),
            catalog,
            source,
        )));
    }
    if catalog.is_function_declaration(node) {
        return Some(Statement::Function(function_decl(
            node,
            node,
            Vec::new(),
            catalog,
            source,
        )));
    }
    if catalog.is_interface_declaration(node) {
        return Some(Statement::Interface(interface_decl(
            node,
            node,
            Vec::new(),
            catalog,
            source,
        )));
    }
    if catalog.is_return_statement(node) {
        let value = helpers::first_named_child(node, catalog)
            .map(|child| convert_expression(&child, catalog, source));
        return Some(Statement::Return(value));
    }
    if catalog.is_expression_statement(node) {
        let expression = helpers::first_named_child(node, catalog)
            .map(|child| convert_expression(&child, catalog, source))
            .unwrap_or(Expression::Other);
        return Some(Statement::Expression(expression));
    }

    Some(Statement::Other)
}

/// Unwrap an `export` statement: exported declarations keep their shape
/// with the export (and default) modifiers attached; `export default
/// <expr>` and `export { names }` become export assignments.
fn export_statement(node: &Node, catalog: &SyntaxCatalog, source: &str) -> Statement {
    let mut modifiers = vec![Modifier::Export];
    if helpers::has_child_token(node, "default") {
        modifiers.push(Modifier::Default);
    }

    if let Some(declaration) = node.child_by_field_name("declaration") {
        if catalog.is_class_declaration(&declaration) {
            return Statement::Class(class_decl(&declaration, node, modifiers, catalog, source));
        }
        if catalog.is_function_declaration(&declaration) {
            return Statement::Function(function_decl(
                &declaration,
                node,
                modifiers,
                catalog,
                source,
            ));
        }
        if catalog.is_interface_declaration(&declaration) {
            return Statement::Interface(interface_decl(
                &declaration,
                node,
                modifiers,
                catalog,
                source,
            ));
        }
        return Statement::Other;
    }

    if let Some(value) = node.child_by_field_name("value") {
        return Statement::Export(ExportAssignment {
            expression: Some(convert_expression(&value, catalog, source)),
            names: Vec::new(),
        });
    }

    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind_id() != catalog.export_clause {
            continue;
        }
        let mut clause_cursor = child.walk();
        for specifier in child.named_children(&mut clause_cursor) {
            if specifier.kind_id() != catalog.export_specifier {
                continue;
            }
            if let Some(name) = specifier.child_by_field_name("name") {
                names.push(helpers::node_text(&name, source));
            }
        }
    }
    Statement::Export(ExportAssignment {
        expression: None,
        names,
    })
}

fn import_decl(node: &Node, catalog: &SyntaxCatalog, source: &str) -> ImportDecl {
    let module = node
        .child_by_field_name("source")
        .map(|n| helpers::string_text(&n, source))
        .unwrap_or_default();

    let mut import = ImportDecl {
        module,
        default_name: None,
        namespace_name: None,
        named: Vec::new(),
    };

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind_id() != catalog.import_clause {
            continue;
        }
        let mut clause_cursor = child.walk();
        for binding in child.named_children(&mut clause_cursor) {
            if catalog.is_identifier(&binding) {
                import.default_name = Some(helpers::node_text(&binding, source));
            } else if binding.kind_id() == catalog.namespace_import {
                import.namespace_name = helpers::first_named_child(&binding, catalog)
                    .map(|n| helpers::node_text(&n, source));
            } else if binding.kind_id() == catalog.named_imports {
                collect_named_imports(&binding, catalog, source, &mut import.named);
            }
        }
    }

    import
}

fn collect_named_imports(
    node: &Node,
    catalog: &SyntaxCatalog,
    source: &str,
    out: &mut Vec<ImportBinding>,
) {
    let mut cursor = node.walk();
    for specifier in node.named_children(&mut cursor) {
        if specifier.kind_id() != catalog.import_specifier {
            continue;
        }
        let Some(name) = specifier.child_by_field_name("name") else {
            continue;
        };
        out.push(ImportBinding {
            name: helpers::node_text(&name, source),
            alias: specifier
                .child_by_field_name("alias")
                .map(|n| helpers::node_text(&n, source)),
        });
    }
}

fn class_decl(
    node: &Node,
    doc_anchor: &Node,
    modifiers: Vec<Modifier>,
    catalog: &SyntaxCatalog,
    source: &str,
) -> ClassDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(&n, source))
        .unwrap_or_default();

    let mut heritage = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if catalog.is_class_heritage(&child) {
            let mut heritage_cursor = child.walk();
            for clause in child.named_children(&mut heritage_cursor) {
                if catalog.is_heritage_clause(&clause) {
                    heritage.push(HeritageClause {
                        types: heritage_types(&clause, catalog, source),
                    });
                }
            }
        }
    }

    let members = node
        .child_by_field_name("body")
        .map(|body| members::class_members(&body, catalog, source))
        .unwrap_or_default();

    ClassDecl {
        name,
        modifiers,
        heritage,
        members,
        doc: doc::doc_comments_before(doc_anchor, catalog, source),
    }
}

/// Entries of one `extends`/`implements` clause. The grammar lays each
/// entry out as a base expression optionally followed by a
/// `type_arguments` sibling, so arguments attach to the entry opened by
/// the expression before them.
fn heritage_types(clause: &Node, catalog: &SyntaxCatalog, source: &str) -> Vec<HeritageType> {
    let mut entries: Vec<HeritageType> = Vec::new();
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if catalog.is_comment(&child) {
            continue;
        }
        if catalog.is_type_arguments(&child) {
            if let Some(last) = entries.last_mut() {
                last.type_arguments = type_argument_list(&child, catalog, source);
            }
            continue;
        }
        entries.push(HeritageType {
            expression: convert_expression(&child, catalog, source),
            type_arguments: Vec::new(),
        });
    }
    entries
}

fn type_argument_list(node: &Node, catalog: &SyntaxCatalog, source: &str) -> Vec<TypeReference> {
    let mut arguments = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if catalog.is_comment(&child) {
            continue;
        }
        arguments.push(types::convert_type(&child, catalog, source));
    }
    arguments
}

fn function_decl(
    node: &Node,
    doc_anchor: &Node,
    modifiers: Vec<Modifier>,
    catalog: &SyntaxCatalog,
    source: &str,
) -> FunctionDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(&n, source))
        .unwrap_or_default();

    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| types::convert_parameters(&params, catalog, source))
        .unwrap_or_default();

    let body = node.child_by_field_name("body").map(|body| Block {
        statements: block_statements(&body, catalog, source),
    });

    FunctionDecl {
        name,
        modifiers,
        parameters,
        body,
        doc: doc::doc_comments_before(doc_anchor, catalog, source),
    }
}

fn interface_decl(
    node: &Node,
    doc_anchor: &Node,
    modifiers: Vec<Modifier>,
    catalog: &SyntaxCatalog,
    source: &str,
) -> InterfaceDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| helpers::node_text(&n, source))
        .unwrap_or_default();

    let members = node
        .child_by_field_name("body")
        .map(|body| members::interface_members(&body, catalog, source))
        .unwrap_or_default();

    InterfaceDecl {
        name,
        modifiers,
        members,
        doc: doc::doc_comments_before(doc_anchor, catalog, source),
    }
}

pub(crate) fn convert_expression(
    node: &Node,
    catalog: &SyntaxCatalog,
    source: &str,
) -> Expression {
    if catalog.is_identifier(node) {
        return Expression::Identifier(helpers::node_text(node, source));
    }
    if catalog.is_property_access_expression(node) {
        let object = node
            .child_by_field_name("object")
            .map(|n| helpers::node_text(&n, source))
            .unwrap_or_default();
        let property = node
            .child_by_field_name("property")
            .map(|n| helpers::node_text(&n, source))
            .unwrap_or_default();
        return Expression::PropertyAccess { object, property };
    }
    if catalog.is_call_expression(node) {
        let arguments = node
            .child_by_field_name("arguments")
            .map(|args| {
                let mut list = Vec::new();
                let mut cursor = args.walk();
                for child in args.named_children(&mut cursor) {
                    if catalog.is_comment(&child) {
                        continue;
                    }
                    list.push(convert_expression(&child, catalog, source));
                }
                list
            })
            .unwrap_or_default();
        return Expression::Call { arguments };
    }
    if catalog.is_markup_node(node) {
        let kind = if node.kind_id() == catalog.jsx_fragment {
            MarkupKind::Fragment
        } else {
            MarkupKind::Element
        };
        return Expression::Markup(kind);
    }
    if catalog.is_parenthesized_expression(node) {
        let inner = helpers::first_named_child(node, catalog)
            .map(|child| convert_expression(&child, catalog, source))
            .unwrap_or(Expression::Other);
        return Expression::Parenthesized(Box::new(inner));
    }

    Expression::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseSession;
    use crate::syntax::tree::{LiteralValue, MemberKind, Primitive};

    fn parse(source: &str) -> SourceFile {
        ParseSession::new("tsx").unwrap().parse(source)
    }

    #[test]
    fn test_import_forms() {
        let file = parse(
            "import React from 'react';\n\
             import * as path from 'node:path';\n\
             import { Component, PureComponent as Pure } from 'react';\n",
        );
        assert_eq!(file.import_path("React"), Some("react"));
        assert_eq!(file.import_path("path"), Some("node:path"));
        assert_eq!(file.import_path("Component"), Some("react"));
        assert_eq!(file.import_path("Pure"), Some("react"));
        assert_eq!(file.import_path("PureComponent"), None);
    }

    #[test]
    fn test_export_wrapper_becomes_modifiers() {
        let file = parse("export default class Widget {}\nexport function helper() {}\n");
        let Statement::Class(class) = &file.statements[0] else {
            panic!("expected class");
        };
        assert!(class.modifiers.contains(&Modifier::Export));
        assert!(class.modifiers.contains(&Modifier::Default));

        let Statement::Function(function) = &file.statements[1] else {
            panic!("expected function");
        };
        assert!(function.modifiers.contains(&Modifier::Export));
        assert!(!function.modifiers.contains(&Modifier::Default));
    }

    #[test]
    fn test_standalone_exports() {
        let file = parse(
            "class Widget {}\n\
             export default Widget;\n\
             export { Widget as W };\n",
        );
        assert!(file.is_name_exported("Widget"));
        // The clause records the inner name, not the alias.
        let Statement::Export(clause) = &file.statements[2] else {
            panic!("expected export clause");
        };
        assert_eq!(clause.names, vec!["Widget".to_string()]);
    }

    #[test]
    fn test_hoc_export_call_arguments() {
        let file = parse("class Widget {}\nexport default withRouter(Widget);\n");
        assert!(file.is_name_exported("Widget"));
        assert!(!file.is_name_exported("withRouter"));
    }

    #[test]
    fn test_heritage_with_type_arguments() {
        let file = parse(
            "import React from 'react';\n\
             class Widget extends React.Component<WidgetProps, WidgetState> {}\n",
        );
        let Statement::Class(class) = &file.statements[1] else {
            panic!("expected class");
        };
        assert_eq!(class.heritage.len(), 1);
        let entry = &class.heritage[0].types[0];
        let Expression::PropertyAccess { object, property } = &entry.expression else {
            panic!("expected property access");
        };
        assert_eq!(object, "React");
        assert_eq!(property, "Component");
        assert_eq!(entry.type_arguments.len(), 2);
        assert!(matches!(
            &entry.type_arguments[0],
            TypeReference::Named { name } if name == "WidgetProps"
        ));
    }

    #[test]
    fn test_interface_members_and_types() {
        let file = parse(
            "interface WidgetProps {\n\
               /** The label. */\n\
               label: string;\n\
               count?: number;\n\
               align: 'left' | 'right';\n\
               onClose: (reason: string) => void;\n\
             }\n",
        );
        let Statement::Interface(interface) = &file.statements[0] else {
            panic!("expected interface");
        };
        assert_eq!(interface.members.len(), 4);

        let label = &interface.members[0];
        assert_eq!(label.name, "label");
        assert!(!label.optional);
        assert_eq!(label.doc, vec!["The label.".to_string()]);
        assert!(matches!(
            label.type_ref,
            Some(TypeReference::Primitive(Primitive::String))
        ));

        let count = &interface.members[1];
        assert!(count.optional);

        let Some(TypeReference::Union { branches }) = &interface.members[2].type_ref else {
            panic!("expected union");
        };
        assert_eq!(branches.len(), 2);
        assert!(matches!(
            &branches[0],
            TypeReference::Literal { text, .. } if text == "left"
        ));

        let Some(TypeReference::Function {
            parameters,
            return_type,
        }) = &interface.members[3].type_ref
        else {
            panic!("expected function type");
        };
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "reason");
        assert!(matches!(
            return_type.as_deref(),
            Some(TypeReference::Primitive(Primitive::Void))
        ));
    }

    #[test]
    fn test_class_members_and_default_props_literal() {
        let file = parse(
            "class Widget {\n\
               static defaultProps = {\n\
                 label: 'hello',\n\
                 visible: true,\n\
                 count: 3,\n\
                 parent: null,\n\
                 theme: defaultTheme,\n\
                 style: { color: 'red' },\n\
               };\n\
               handleClick = () => {};\n\
               render() { return null; }\n\
             }\n",
        );
        let Statement::Class(class) = &file.statements[0] else {
            panic!("expected class");
        };
        assert_eq!(class.members.len(), 3);

        let defaults = &class.members[0];
        assert_eq!(defaults.name, "defaultProps");
        assert!(defaults.is_static());
        assert_eq!(defaults.kind, MemberKind::Property);
        let init = defaults.initializer.as_ref().expect("initializer");
        assert_eq!(init.properties.len(), 6);
        assert_eq!(init.properties[0].value, LiteralValue::String("hello".to_string()));
        assert_eq!(init.properties[1].value, LiteralValue::True);
        assert_eq!(init.properties[2].value, LiteralValue::Number("3".to_string()));
        assert_eq!(init.properties[3].value, LiteralValue::Null);
        assert_eq!(
            init.properties[4].value,
            LiteralValue::Identifier("defaultTheme".to_string())
        );
        assert_eq!(init.properties[5].value, LiteralValue::Other);

        assert_eq!(class.members[1].kind, MemberKind::ArrowMethod);
        assert_eq!(class.members[2].kind, MemberKind::Method);
    }

    #[test]
    fn test_markup_statements_in_function_bodies() {
        let file = parse(
            "function App() {\n\
               return (\n\
                 <div>hi</div>\n\
               );\n\
             }\n\
             function Frag() { return <>text</>; }\n",
        );
        let Statement::Function(app) = &file.statements[0] else {
            panic!("expected function");
        };
        let Statement::Return(Some(value)) = &app.body.as_ref().unwrap().statements[0] else {
            panic!("expected return");
        };
        assert!(matches!(value, Expression::Parenthesized(_)));

        let Statement::Function(frag) = &file.statements[1] else {
            panic!("expected function");
        };
        let Statement::Return(Some(value)) = &frag.body.as_ref().unwrap().statements[0] else {
            panic!("expected return");
        };
        assert!(matches!(value, Expression::Markup(MarkupKind::Fragment)));
    }
}
