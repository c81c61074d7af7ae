//! Component extraction
//!
//! The detector (`components`) and prop extractor (`props`) walk the
//! typed syntax model produced by [`crate::parse`]; `extract_components`
//! fans them out over a batch of parsed files, and
//! [`manager::ExtractorManager`] wires parsing and extraction together
//! for callers holding raw sources or paths.

pub mod components;
pub mod manager;
pub mod props;
pub mod types;

use std::collections::HashMap;
use std::time::Instant;

use crate::syntax::tree::SourceFile;

pub use manager::ExtractorManager;
pub use types::{Component, ComponentType, ParamDef, PropDef, PROP_TYPE_ENUM, PROP_TYPE_FUNCTION};

/// Extract components from a batch of parsed files, keyed by path.
///
/// Deterministic per file; the aggregate order follows map iteration and
/// is unspecified, so callers that need a stable order sort the result
/// (see [`ExtractorManager`]). Files with zero statements contribute
/// zero components. Components are not deduplicated across files: the
/// same name in two files yields two entries with distinct source paths.
pub fn extract_components(files: &HashMap<String, SourceFile>) -> Vec<Component> {
    let start = Instant::now();
    let mut list = Vec::new();

    if files.is_empty() {
        return list;
    }

    for (path, source_file) in files {
        let (file_name, directory) = split_name_and_path(path);
        tracing::debug!(file = %file_name, directory = %directory, "extracting components");
        list.extend(components::components_in_file(source_file, directory));
    }

    tracing::info!(
        components = list.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "component extraction finished"
    );

    list
}

/// Split a path into file name and directory, tolerating a trailing
/// slash. Paths without a separator are all file name.
pub(crate) fn split_name_and_path(path: &str) -> (&str, &str) {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    match trimmed.rfind('/') {
        Some(index) => (&trimmed[index + 1..], &trimmed[..index]),
        None => (trimmed, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseSession;

    #[test]
    fn test_split_name_and_path() {
        assert_eq!(
            split_name_and_path("src/components/Alert.tsx"),
            ("Alert.tsx", "src/components")
        );
        assert_eq!(split_name_and_path("Alert.tsx"), ("Alert.tsx", ""));
        assert_eq!(split_name_and_path("src/components/"), ("components", "src"));
    }

    #[test]
    fn test_empty_batch_and_empty_files_yield_nothing() {
        assert!(extract_components(&HashMap::new()).is_empty());

        let mut session = ParseSession::new("tsx").unwrap();
        let mut files = HashMap::new();
        files.insert("src/empty.tsx".to_string(), session.parse(""));
        assert!(extract_components(&files).is_empty());
    }

    #[test]
    fn test_same_component_name_in_two_files_is_kept_twice() {
        let source = "import React from 'react';\n\
             export default class Alert extends React.Component {\n\
               render() { return <div /> }\n\
             }\n";
        let mut session = ParseSession::new("tsx").unwrap();
        let mut files = HashMap::new();
        files.insert("a/Alert.tsx".to_string(), session.parse(source));
        files.insert("b/Alert.tsx".to_string(), session.parse(source));

        let mut found = extract_components(&files);
        assert_eq!(found.len(), 2);
        found.sort_by(|x, y| x.source_path.cmp(&y.source_path));
        assert_eq!(found[0].source_path, "a");
        assert_eq!(found[1].source_path, "b");
    }
}
