//! Session-resolved node-kind catalog
//!
//! Numeric node-kind ids are not stable across grammar versions, so they
//! are never hard-coded. `SyntaxCatalog::resolve` asks the grammar's own
//! symbol table for every kind the converter routes on, once per parse
//! session; the resulting value is immutable and read-only for the rest
//! of the session. All "what kind of node is this" decisions over raw
//! tree-sitter nodes live here as predicate methods, so the rest of the
//! crate never inspects kind ids directly.

use thiserror::Error;
use tree_sitter::{Language, Node};

/// The reserved tree-sitter id that no real node carries. Kinds a grammar
/// legitimately lacks (JSX kinds in the plain TypeScript grammar) resolve
/// to this value and simply never match.
pub const NO_KIND: u16 = 0;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("grammar does not define required node kind `{0}`")]
    MissingKind(&'static str),
}

/// Node-kind ids for one grammar, resolved at session start.
///
/// `Default` yields an empty catalog in which no predicate matches any
/// node; tests use it to build synthetic catalogs field by field.
#[derive(Debug, Clone, Default)]
pub struct SyntaxCatalog {
    // Statements and declarations
    pub comment: u16,
    pub import_statement: u16,
    pub export_statement: u16,
    pub expression_statement: u16,
    pub return_statement: u16,
    pub class_declaration: u16,
    pub function_declaration: u16,
    pub interface_declaration: u16,

    // Import/export clauses
    pub import_clause: u16,
    pub named_imports: u16,
    pub import_specifier: u16,
    pub namespace_import: u16,
    pub export_clause: u16,
    pub export_specifier: u16,

    // Class structure
    pub class_heritage: u16,
    pub extends_clause: u16,
    pub implements_clause: u16,
    pub type_arguments: u16,
    pub method_definition: u16,
    pub method_signature: u16,
    pub field_definition: u16,
    pub property_signature: u16,

    // Type annotations
    pub type_annotation: u16,
    pub type_identifier: u16,
    pub nested_type_identifier: u16,
    pub generic_type: u16,
    pub predefined_type: u16,
    pub union_type: u16,
    pub function_type: u16,
    pub literal_type: u16,
    pub parenthesized_type: u16,
    pub formal_parameters: u16,
    pub required_parameter: u16,
    pub optional_parameter: u16,

    // Expressions
    pub identifier: u16,
    pub property_identifier: u16,
    pub member_expression: u16,
    pub call_expression: u16,
    pub parenthesized_expression: u16,
    pub arrow_function: u16,
    pub function_expression: u16,
    pub object: u16,
    pub pair: u16,

    // Literals
    pub string: u16,
    pub string_fragment: u16,
    pub number: u16,
    pub true_keyword: u16,
    pub false_keyword: u16,
    pub null_keyword: u16,
    pub undefined_keyword: u16,

    // Markup; NO_KIND in grammars without JSX
    pub jsx_element: u16,
    pub jsx_self_closing_element: u16,
    pub jsx_fragment: u16,
}

impl SyntaxCatalog {
    /// Resolve the catalog from a grammar's symbol table. Fails if any
    /// required kind is missing; markup kinds are optional because the
    /// plain TypeScript grammar has no JSX.
    pub fn resolve(language: &Language) -> Result<Self, CatalogError> {
        Ok(Self {
            comment: required(language, &["comment"])?,
            import_statement: required(language, &["import_statement"])?,
            export_statement: required(language, &["export_statement"])?,
            expression_statement: required(language, &["expression_statement"])?,
            return_statement: required(language, &["return_statement"])?,
            class_declaration: required(language, &["class_declaration"])?,
            function_declaration: required(language, &["function_declaration"])?,
            interface_declaration: required(language, &["interface_declaration"])?,

            import_clause: required(language, &["import_clause"])?,
            named_imports: required(language, &["named_imports"])?,
            import_specifier: required(language, &["import_specifier"])?,
            namespace_import: required(language, &["namespace_import"])?,
            export_clause: required(language, &["export_clause"])?,
            export_specifier: required(language, &["export_specifier"])?,

            class_heritage: required(language, &["class_heritage"])?,
            extends_clause: required(language, &["extends_clause"])?,
            implements_clause: required(language, &["implements_clause"])?,
            type_arguments: required(language, &["type_arguments"])?,
            method_definition: required(language, &["method_definition"])?,
            method_signature: required(language, &["method_signature"])?,
            // Renamed between grammar generations
            field_definition: required(language, &["public_field_definition", "field_definition"])?,
            property_signature: required(language, &["property_signature"])?,

            type_annotation: required(language, &["type_annotation"])?,
            type_identifier: required(language, &["type_identifier"])?,
            nested_type_identifier: required(language, &["nested_type_identifier"])?,
            generic_type: required(language, &["generic_type"])?,
            predefined_type: required(language, &["predefined_type"])?,
            union_type: required(language, &["union_type"])?,
            function_type: required(language, &["function_type"])?,
            literal_type: required(language, &["literal_type"])?,
            parenthesized_type: required(language, &["parenthesized_type"])?,
            formal_parameters: required(language, &["formal_parameters"])?,
            required_parameter: required(language, &["required_parameter"])?,
            optional_parameter: required(language, &["optional_parameter"])?,

            identifier: required(language, &["identifier"])?,
            property_identifier: required(language, &["property_identifier"])?,
            member_expression: required(language, &["member_expression"])?,
            call_expression: required(language, &["call_expression"])?,
            parenthesized_expression: required(language, &["parenthesized_expression"])?,
            arrow_function: required(language, &["arrow_function"])?,
            function_expression: required(language, &["function_expression", "function"])?,
            object: required(language, &["object"])?,
            pair: required(language, &["pair"])?,

            string: required(language, &["string"])?,
            string_fragment: required(language, &["string_fragment"])?,
            number: required(language, &["number"])?,
            true_keyword: required(language, &["true"])?,
            false_keyword: required(language, &["false"])?,
            null_keyword: required(language, &["null"])?,
            undefined_keyword: required(language, &["undefined"])?,

            jsx_element: optional(language, "jsx_element"),
            jsx_self_closing_element: optional(language, "jsx_self_closing_element"),
            jsx_fragment: optional(language, "jsx_fragment"),
        })
    }

    pub fn is_comment(&self, node: &Node) -> bool {
        node.kind_id() == self.comment
    }

    pub fn is_import_declaration(&self, node: &Node) -> bool {
        node.kind_id() == self.import_statement
    }

    pub fn is_export_statement(&self, node: &Node) -> bool {
        node.kind_id() == self.export_statement
    }

    pub fn is_expression_statement(&self, node: &Node) -> bool {
        node.kind_id() == self.expression_statement
    }

    pub fn is_return_statement(&self, node: &Node) -> bool {
        node.kind_id() == self.return_statement
    }

    pub fn is_class_declaration(&self, node: &Node) -> bool {
        node.kind_id() == self.class_declaration
    }

    pub fn is_function_declaration(&self, node: &Node) -> bool {
        node.kind_id() == self.function_declaration
    }

    pub fn is_interface_declaration(&self, node: &Node) -> bool {
        node.kind_id() == self.interface_declaration
    }

    pub fn is_class_heritage(&self, node: &Node) -> bool {
        node.kind_id() == self.class_heritage
    }

    /// An `extends` or `implements` clause inside a class heritage.
    pub fn is_heritage_clause(&self, node: &Node) -> bool {
        node.kind_id() == self.extends_clause || node.kind_id() == self.implements_clause
    }

    pub fn is_type_arguments(&self, node: &Node) -> bool {
        node.kind_id() == self.type_arguments
    }

    pub fn is_method_definition(&self, node: &Node) -> bool {
        node.kind_id() == self.method_definition || node.kind_id() == self.method_signature
    }

    pub fn is_field_definition(&self, node: &Node) -> bool {
        node.kind_id() == self.field_definition
    }

    pub fn is_property_signature(&self, node: &Node) -> bool {
        node.kind_id() == self.property_signature
    }

    /// A named type reference: plain, qualified, or generic.
    pub fn is_named_type(&self, node: &Node) -> bool {
        node.kind_id() == self.type_identifier
            || node.kind_id() == self.nested_type_identifier
            || node.kind_id() == self.generic_type
    }

    pub fn is_predefined_type(&self, node: &Node) -> bool {
        node.kind_id() == self.predefined_type
    }

    pub fn is_union_type(&self, node: &Node) -> bool {
        node.kind_id() == self.union_type
    }

    pub fn is_function_type(&self, node: &Node) -> bool {
        node.kind_id() == self.function_type
    }

    pub fn is_literal_type(&self, node: &Node) -> bool {
        node.kind_id() == self.literal_type
    }

    pub fn is_parenthesized_type(&self, node: &Node) -> bool {
        node.kind_id() == self.parenthesized_type
    }

    pub fn is_formal_parameters(&self, node: &Node) -> bool {
        node.kind_id() == self.formal_parameters
    }

    pub fn is_parameter(&self, node: &Node) -> bool {
        node.kind_id() == self.required_parameter || node.kind_id() == self.optional_parameter
    }

    pub fn is_type_annotation(&self, node: &Node) -> bool {
        node.kind_id() == self.type_annotation
    }

    pub fn is_identifier(&self, node: &Node) -> bool {
        node.kind_id() == self.identifier
    }

    pub fn is_property_access_expression(&self, node: &Node) -> bool {
        node.kind_id() == self.member_expression
    }

    pub fn is_call_expression(&self, node: &Node) -> bool {
        node.kind_id() == self.call_expression
    }

    pub fn is_parenthesized_expression(&self, node: &Node) -> bool {
        node.kind_id() == self.parenthesized_expression
    }

    /// An arrow function or function expression, the two member-value
    /// shapes that make a class field behave like a method.
    pub fn is_function_valued(&self, node: &Node) -> bool {
        node.kind_id() == self.arrow_function || node.kind_id() == self.function_expression
    }

    pub fn is_object_literal(&self, node: &Node) -> bool {
        node.kind_id() == self.object
    }

    pub fn is_pair(&self, node: &Node) -> bool {
        node.kind_id() == self.pair
    }

    pub fn is_string_literal(&self, node: &Node) -> bool {
        node.kind_id() == self.string
    }

    /// A markup element or fragment node.
    pub fn is_markup_node(&self, node: &Node) -> bool {
        let id = node.kind_id();
        id == self.jsx_element || id == self.jsx_self_closing_element || id == self.jsx_fragment
    }

    /// A markup node, directly or wrapped in any depth of parentheses.
    pub fn is_markup_like(&self, node: &Node) -> bool {
        if self.is_markup_node(node) {
            return true;
        }
        if self.is_parenthesized_expression(node) {
            let mut cursor = node.walk();
            return node
                .named_children(&mut cursor)
                .filter(|child| !self.is_comment(child))
                .any(|child| self.is_markup_like(&child));
        }
        false
    }
}

fn required(language: &Language, kinds: &[&'static str]) -> Result<u16, CatalogError> {
    for kind in kinds {
        let id = language.id_for_node_kind(kind, true);
        if id != NO_KIND {
            return Ok(id);
        }
    }
    Err(CatalogError::MissingKind(kinds[0]))
}

fn optional(language: &Language, kind: &str) -> u16 {
    language.id_for_node_kind(kind, true)
}
