//! Component detection
//!
//! Decides, per top-level statement, whether a declaration denotes a UI
//! component. Class-based components must be exported, extend
//! `Component` or `PureComponent` imported from the react package, and
//! define a `render` method. Function-based components must be exported
//! and return a markup expression from their body.

use crate::extractors::props;
use crate::extractors::types::{Component, ComponentType};
use crate::syntax::classify;
use crate::syntax::tree::{
    ClassDecl, Expression, FunctionDecl, HeritageType, SourceFile, Statement, TypeReference,
};

/// The markup library package components must extend from, compared
/// case-insensitively against resolved import paths.
const REACT_MODULE: &str = "react";

/// Detect the components declared in one file, in declaration order.
pub(crate) fn components_in_file(file: &SourceFile, source_path: &str) -> Vec<Component> {
    let mut components = Vec::new();

    for statement in &file.statements {
        match statement {
            Statement::Class(class) => {
                if let Some(component) = class_component(file, statement, class, source_path) {
                    components.push(component);
                }
            }
            Statement::Function(function) => {
                if let Some(component) = function_component(file, function, source_path) {
                    components.push(component);
                }
            }
            _ => {}
        }
    }

    components
}

fn class_component(
    file: &SourceFile,
    statement: &Statement,
    class: &ClassDecl,
    source_path: &str,
) -> Option<Component> {
    // Only exported classes are documented.
    if !(class.is_exported() || file.is_name_exported(&class.name)) {
        return None;
    }

    // A component must extend something; plain classes never render.
    if class.heritage.is_empty() {
        return None;
    }

    if !classify::has_method_named(statement, "render") {
        return None;
    }

    let matched = detect_react_heritage(file, class)?;

    // Build the default map before reading the props so each prop can
    // pick up its value in one pass over the interface.
    let defaults = props::default_value_map(class);

    let mut prop_defs = Vec::new();
    if let Some(TypeReference::Named { name }) = matched.type_arguments.first() {
        // The first type argument names the props interface. Interfaces
        // declared in other modules resolve to nothing and leave the
        // component without props rather than failing the file.
        if let Some(members) = file.members_of_type(name) {
            prop_defs = props::extract_props(members, &defaults);
        }
    }

    Some(Component {
        name: class.name.clone(),
        source_path: source_path.to_string(),
        component_type: ComponentType::ClassComponent,
        description: classify::join_doc_comments(&class.doc),
        props: prop_defs,
    })
}

/// Walk the heritage clauses in declaration order and return the first
/// entry whose base resolves to `Component`/`PureComponent` imported from
/// the react package.
fn detect_react_heritage<'a>(file: &SourceFile, class: &'a ClassDecl) -> Option<&'a HeritageType> {
    for clause in &class.heritage {
        for entry in &clause.types {
            if is_react_base(file, &entry.expression) {
                return Some(entry);
            }
        }
    }
    None
}

fn is_react_base(file: &SourceFile, expression: &Expression) -> bool {
    // `extends Component` checks the identifier's own import;
    // `extends React.Component` checks the object's import.
    let (import_name, base_name) = match expression {
        Expression::Identifier(name) => (name.as_str(), name.as_str()),
        Expression::PropertyAccess { object, property } => (object.as_str(), property.as_str()),
        _ => return false,
    };

    if base_name != "Component" && base_name != "PureComponent" {
        return false;
    }

    matches!(
        file.import_path(import_name),
        Some(module) if module.eq_ignore_ascii_case(REACT_MODULE)
    )
}

fn function_component(
    file: &SourceFile,
    function: &FunctionDecl,
    source_path: &str,
) -> Option<Component> {
    if !(function.is_exported() || file.is_name_exported(&function.name)) {
        return None;
    }

    let body = function.body.as_ref()?;
    if body.statements.is_empty() {
        return None;
    }

    // Accept on the first statement that produces markup: a return of a
    // markup expression, or a bare parenthesized markup expression.
    let returns_markup = body.statements.iter().any(|statement| match statement {
        Statement::Return(Some(expression)) => classify::is_markup_expression(expression),
        Statement::Expression(expression @ Expression::Parenthesized(_)) => {
            classify::is_markup_expression(expression)
        }
        _ => false,
    });
    if !returns_markup {
        return None;
    }

    // Parameters are observed but not yet converted to props; function
    // components always report an empty prop list.
    Some(Component {
        name: function.name.clone(),
        source_path: source_path.to_string(),
        component_type: ComponentType::FunctionComponent,
        description: classify::join_doc_comments(&function.doc),
        props: Vec::new(),
    })
}
