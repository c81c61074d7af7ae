//! Output entities consumed downstream
//!
//! Serialization itself is a caller concern; these types carry the wire
//! field names so any serde backend produces the documented shape.

use serde::{Deserialize, Serialize};

/// Sentinel prop type for union-typed props.
pub const PROP_TYPE_ENUM: &str = "$enum";
/// Sentinel prop type for function-typed props.
pub const PROP_TYPE_FUNCTION: &str = "$function";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    ClassComponent,
    FunctionComponent,
}

/// A detected UI component eligible for documentation. Built once during
/// extraction and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    #[serde(rename = "sourcePath")]
    pub source_path: String,
    #[serde(rename = "componentType")]
    pub component_type: ComponentType,
    pub description: String,
    pub props: Vec<PropDef>,
}

/// One prop of a component, mirroring the declaration order of the props
/// interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropDef {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    /// Union variants; populated only when `prop_type` is [`PROP_TYPE_ENUM`].
    #[serde(rename = "enumOf", default, skip_serializing_if = "Option::is_none")]
    pub enum_types: Option<Vec<ParamDef>>,
    pub required: bool,
    #[serde(rename = "defaultValue")]
    pub default_value: String,
    pub description: String,
    /// Return type; empty unless `prop_type` is [`PROP_TYPE_FUNCTION`].
    #[serde(rename = "returnType")]
    pub return_type: String,
    /// Function parameters; populated only when `prop_type` is
    /// [`PROP_TYPE_FUNCTION`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParamDef>>,
}

/// A name/type pair: a union variant or a function parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParamDef {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_wire_shape() {
        let component = Component {
            name: "HelloWorld".to_string(),
            source_path: "src/components".to_string(),
            component_type: ComponentType::ClassComponent,
            description: "A greeting".to_string(),
            props: vec![PropDef {
                name: "mode".to_string(),
                prop_type: PROP_TYPE_ENUM.to_string(),
                enum_types: Some(vec![ParamDef {
                    name: "compact".to_string(),
                    param_type: "string".to_string(),
                }]),
                required: true,
                ..PropDef::default()
            }],
        };

        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["sourcePath"], "src/components");
        assert_eq!(json["componentType"], "class_component");
        assert_eq!(json["props"][0]["type"], "$enum");
        assert_eq!(json["props"][0]["enumOf"][0]["type"], "string");
        assert_eq!(json["props"][0]["defaultValue"], "");
        // Function fields are omitted for non-function props.
        assert!(json["props"][0].get("params").is_none());

        let back: Component = serde_json::from_value(json).unwrap();
        assert_eq!(back, component);
    }
}
