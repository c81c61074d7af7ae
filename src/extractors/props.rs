//! Prop schema extraction
//!
//! Turns the members of a props interface plus the component's static
//! default-value map into the normalized prop list. The type resolution
//! priority is: named reference verbatim, canonical primitive, union
//! (`$enum`), function type (`$function`), unknown sentinel.

use std::collections::HashMap;

use crate::extractors::types::{ParamDef, PropDef, PROP_TYPE_ENUM, PROP_TYPE_FUNCTION};
use crate::syntax::classify;
use crate::syntax::tree::{ClassDecl, LiteralValue, Member, TypeReference};

/// Build the prop list for a props interface, mirroring member order.
pub(crate) fn extract_props(
    members: &[Member],
    defaults: &HashMap<String, String>,
) -> Vec<PropDef> {
    members
        .iter()
        .map(|member| prop_from_member(member, defaults))
        .collect()
}

fn prop_from_member(member: &Member, defaults: &HashMap<String, String>) -> PropDef {
    let mut prop = PropDef {
        name: member.name.clone(),
        prop_type: classify::UNKNOWN_TYPE.to_string(),
        // Required unless the member carries the optional marker.
        required: !member.optional,
        default_value: defaults.get(&member.name).cloned().unwrap_or_default(),
        description: classify::join_doc_comments(&member.doc),
        ..PropDef::default()
    };

    match member.type_ref.as_ref() {
        // A named reference is used verbatim, whatever it names.
        Some(TypeReference::Named { name }) => {
            prop.prop_type = name.clone();
        }
        type_ref => {
            let resolved = classify::resolve_type(type_ref);
            let is_function = matches!(type_ref, Some(TypeReference::Function { .. }));
            if !classify::is_unknown_type(resolved) && !is_function {
                prop.prop_type = resolved.to_string();
            } else if let Some(TypeReference::Union { branches }) = type_ref {
                prop.prop_type = PROP_TYPE_ENUM.to_string();
                prop.enum_types = Some(enum_branches(branches));
            } else if let Some(TypeReference::Function {
                parameters,
                return_type,
            }) = type_ref
            {
                prop.prop_type = PROP_TYPE_FUNCTION.to_string();
                prop.params = Some(
                    parameters
                        .iter()
                        .map(|parameter| ParamDef {
                            name: parameter.name.clone(),
                            param_type: resolve_value_type(parameter.type_ref.as_ref()),
                        })
                        .collect(),
                );
                prop.return_type = resolve_value_type(return_type.as_deref());
            }
        }
    }

    prop
}

/// Resolution for function parameter and return types: named references
/// flow through verbatim (so `=> object` reads "object"), everything
/// else takes its canonical name or the unknown sentinel.
fn resolve_value_type(type_ref: Option<&TypeReference>) -> String {
    match type_ref {
        Some(TypeReference::Named { name }) => name.clone(),
        _ => classify::resolve_type(type_ref).to_string(),
    }
}

/// Union branches become name/type pairs: named references keep their
/// name, literals keep their text plus literal class. Branches outside
/// those shapes hold their position as empty entries so indices still
/// line up with the declaration.
fn enum_branches(branches: &[TypeReference]) -> Vec<ParamDef> {
    branches
        .iter()
        .map(|branch| match branch {
            TypeReference::Named { name } => ParamDef {
                name: name.clone(),
                param_type: String::new(),
            },
            TypeReference::Literal { text, kind } => ParamDef {
                name: text.clone(),
                param_type: classify::resolve_literal(*kind).to_string(),
            },
            _ => ParamDef::default(),
        })
        .collect()
}

/// Default values declared on the class's `static defaultProps` member,
/// keyed by prop name. Props absent from the initializer get no entry;
/// complex initializer expressions map to an empty string.
pub(crate) fn default_value_map(class: &ClassDecl) -> HashMap<String, String> {
    let mut map = HashMap::new();

    let Some(member) = class
        .members
        .iter()
        .find(|member| member.name == "defaultProps" && member.is_static())
    else {
        return map;
    };
    let Some(initializer) = &member.initializer else {
        return map;
    };

    for property in &initializer.properties {
        map.insert(
            property.name.clone(),
            default_value_text(&property.value),
        );
    }

    map
}

fn default_value_text(value: &LiteralValue) -> String {
    match value {
        LiteralValue::True => "true".to_string(),
        LiteralValue::False => "false".to_string(),
        LiteralValue::Null => "null".to_string(),
        LiteralValue::String(text) | LiteralValue::Number(text) | LiteralValue::Identifier(text) => {
            text.clone()
        }
        // Nested literals and inline functions have no usable text.
        LiteralValue::Other => String::new(),
    }
}
