//! ExtractorManager - public API for component extraction
//!
//! Routes files to a parse session by extension, runs extraction over
//! the parsed batch, and returns the aggregate sorted by component name.
//! Sessions are created lazily, one per grammar, and reused for every
//! file of that language in the batch.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::extractors::types::Component;
use crate::language::detect_language_from_extension;
use crate::parse::ParseSession;

/// Manager driving parsing and extraction over batches of source files.
pub struct ExtractorManager {
    sessions: HashMap<&'static str, ParseSession>,
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Supported language identifiers.
    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["typescript", "tsx"]
    }

    /// Parse and extract components from in-memory sources, given as
    /// `(path, content)` pairs. Files with unsupported extensions are
    /// skipped with a warning. The result is stably sorted by component
    /// name ascending (ordinal comparison).
    pub fn extract_from_sources(&mut self, sources: &[(String, String)]) -> Result<Vec<Component>> {
        let mut files = HashMap::new();

        for (path, content) in sources {
            let Some(language) = language_for_path(path) else {
                tracing::warn!(path = %path, "skipping file with unsupported extension");
                continue;
            };
            let session = self.session(language)?;
            files.insert(path.clone(), session.parse(content));
        }

        let mut components = crate::extractors::extract_components(&files);
        components.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(components)
    }

    /// Read the given files from disk and extract components. The list
    /// is explicit; scanning folders for candidates is a caller concern.
    pub fn extract_from_paths(&mut self, paths: &[PathBuf]) -> Result<Vec<Component>> {
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            sources.push((path.to_string_lossy().replace('\\', "/"), content));
        }
        self.extract_from_sources(&sources)
    }

    fn session(&mut self, language: &'static str) -> Result<&mut ParseSession> {
        match self.sessions.entry(language) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(ParseSession::new(language)?)),
        }
    }
}

fn language_for_path(path: &str) -> Option<&'static str> {
    let extension = Path::new(path).extension().and_then(|ext| ext.to_str())?;
    detect_language_from_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::types::{ComponentType, PROP_TYPE_FUNCTION};
    use std::io::Write;

    const HELLO_WORLD_WITH_PROPS: &str = "import React from 'react';\n\
\n\
interface HelloWorldProps {\n\
    /**\n\
     * I am param string.\n\
     */\n\
    paramString: string;\n\
\n\
    /**\n\
     * I am param boolean.\n\
     */\n\
    paramBoolean?: boolean;\n\
\n\
    /**\n\
     * I am param any.\n\
     */\n\
    paramAny: any;\n\
\n\
    /**\n\
     * I am param number.\n\
     */\n\
    paramNumber: number;\n\
\n\
    /**\n\
     * I am param object.\n\
     */\n\
    paramObject: object;\n\
\n\
    /**\n\
     * I am param function.\n\
     */\n\
    paramFunction: Function;\n\
\n\
    /**\n\
     * I am param arrow function.\n\
     */\n\
    paramEmptyArrowFunction: () => void;\n\
\n\
    /**\n\
     * I am param arrow function with args.\n\
     */\n\
    paramArrowFunction: (str: string, num: number) => object;\n\
}\n\
\n\
/**\n\
 * This is a hello world component\n\
 */\n\
export default class HelloWorld extends React.Component<HelloWorldProps> {\n\
\n\
    static defaultProps = {\n\
        paramString: \"hello\",\n\
        paramBoolean: false,\n\
        paramAny: { name: \"docs\" },\n\
        paramNumber: 256,\n\
        paramObject: { hello: \"world\" },\n\
        paramFunction: () => {},\n\
    }\n\
\n\
    render() {\n\
        return <div>Hello World</div>\n\
    }\n\
\n\
}\n";

    fn extract_single(source: &str) -> Vec<Component> {
        let mut manager = ExtractorManager::new();
        manager
            .extract_from_sources(&[("in-memory/testing/testComponent.tsx".to_string(), source.to_string())])
            .unwrap()
    }

    #[test]
    fn test_empty_source_file() {
        assert!(extract_single("").is_empty());
    }

    #[test]
    fn test_class_component_with_no_props_and_no_doc() {
        let source = "import React from 'react';\n\
             export default class HelloWorld extends React.Component {\n\
               render() {\n\
                 return <div>Hello World</div>\n\
               }\n\
             }\n";
        let components = extract_single(source);
        assert_eq!(components.len(), 1);

        let component = &components[0];
        assert_eq!(component.description, "");
        assert_eq!(component.component_type, ComponentType::ClassComponent);
        assert_eq!(component.source_path, "in-memory/testing");
        assert!(component.props.is_empty());
    }

    #[test]
    fn test_class_component_with_props_and_doc() {
        let components = extract_single(HELLO_WORLD_WITH_PROPS);
        assert_eq!(components.len(), 1);

        let component = &components[0];
        assert_eq!(component.name, "HelloWorld");
        assert_eq!(component.description, "This is a hello world component");
        assert_eq!(component.component_type, ComponentType::ClassComponent);
        assert_eq!(component.props.len(), 8);

        let param = &component.props[0];
        assert_eq!(param.name, "paramString");
        assert_eq!(param.prop_type, "string");
        assert!(param.required);
        assert_eq!(param.default_value, "hello");
        assert_eq!(param.description, "I am param string.");
        assert_eq!(param.return_type, "");
        assert!(param.params.is_none());
        assert!(param.enum_types.is_none());

        let param = &component.props[1];
        assert_eq!(param.name, "paramBoolean");
        assert_eq!(param.prop_type, "boolean");
        assert!(!param.required);
        assert_eq!(param.default_value, "false");
        assert_eq!(param.description, "I am param boolean.");

        let param = &component.props[2];
        assert_eq!(param.name, "paramAny");
        assert_eq!(param.prop_type, "any");
        assert!(param.required);
        // The nested object literal default has no usable text.
        assert_eq!(param.default_value, "");

        let param = &component.props[3];
        assert_eq!(param.name, "paramNumber");
        assert_eq!(param.prop_type, "number");
        assert_eq!(param.default_value, "256");

        let param = &component.props[4];
        assert_eq!(param.name, "paramObject");
        assert_eq!(param.prop_type, "object");
        assert_eq!(param.default_value, "");

        let param = &component.props[5];
        assert_eq!(param.name, "paramFunction");
        assert_eq!(param.prop_type, "Function");
        assert_eq!(param.default_value, "");

        let param = &component.props[6];
        assert_eq!(param.name, "paramEmptyArrowFunction");
        assert_eq!(param.prop_type, PROP_TYPE_FUNCTION);
        assert!(param.required);
        assert_eq!(param.return_type, "void");
        assert_eq!(param.params.as_ref().unwrap().len(), 0);
        assert!(param.enum_types.is_none());

        let param = &component.props[7];
        assert_eq!(param.name, "paramArrowFunction");
        assert_eq!(param.prop_type, PROP_TYPE_FUNCTION);
        assert_eq!(param.return_type, "object");
        let params = param.params.as_ref().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "str");
        assert_eq!(params[0].param_type, "string");
        assert_eq!(params[1].name, "num");
        assert_eq!(params[1].param_type, "number");
    }

    #[test]
    fn test_enum_props_from_union_types() {
        let source = "import React from 'react';\n\
             interface AlertProps {\n\
               variant: 'info' | 'warning' | Severity;\n\
             }\n\
             export default class Alert extends React.Component<AlertProps> {\n\
               render() { return <div /> }\n\
             }\n";
        let components = extract_single(source);
        let prop = &components[0].props[0];
        assert_eq!(prop.prop_type, "$enum");
        let variants = prop.enum_types.as_ref().unwrap();
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0].name, "info");
        assert_eq!(variants[0].param_type, "string");
        assert_eq!(variants[2].name, "Severity");
        assert_eq!(variants[2].param_type, "");
    }

    #[test]
    fn test_aggregate_is_sorted_by_name() {
        let zulu = "import React from 'react';\n\
             export default class Zulu extends React.Component {\n\
               render() { return <div /> }\n\
             }\n";
        let alpha = "/** First. */\n\
             export function Alpha() { return <div /> }\n";
        let mut manager = ExtractorManager::new();
        let components = manager
            .extract_from_sources(&[
                ("src/Zulu.tsx".to_string(), zulu.to_string()),
                ("src/Alpha.tsx".to_string(), alpha.to_string()),
            ])
            .unwrap();

        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zulu"]);
        assert_eq!(components[0].source_path, "src");
    }

    #[test]
    fn test_unsupported_extensions_are_skipped() {
        let mut manager = ExtractorManager::new();
        let components = manager
            .extract_from_sources(&[
                ("notes/readme.md".to_string(), "# readme".to_string()),
                ("no_extension".to_string(), "text".to_string()),
            ])
            .unwrap();
        assert!(components.is_empty());
    }

    #[test]
    fn test_extract_from_paths_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Hello.tsx");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(HELLO_WORLD_WITH_PROPS.as_bytes()).unwrap();

        let mut manager = ExtractorManager::new();
        let components = manager.extract_from_paths(&[path]).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "HelloWorld");
        assert_eq!(components[0].props.len(), 8);

        let missing = dir.path().join("missing.tsx");
        assert!(manager.extract_from_paths(&[missing]).is_err());
    }

    #[test]
    fn test_plain_typescript_files_still_extract_interfaces() {
        // A `.ts` session has no markup kinds; class components without
        // JSX in scope still resolve, function bodies never match.
        let source = "import React from 'react';\n\
             interface P { label: string; }\n\
             export default class Quiet extends React.Component<P> {\n\
               render() { return null; }\n\
             }\n";
        let mut manager = ExtractorManager::new();
        let components = manager
            .extract_from_sources(&[("src/Quiet.ts".to_string(), source.to_string())])
            .unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].props.len(), 1);
    }
}
