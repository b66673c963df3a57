use serde_json::Value;
use std::collections::BTreeMap;

/// Key fragments that mark a field as a package name when its value is a
/// string.
const NAME_INDICATORS: &[&str] = &["name", "package", "component", "artifactid"];

/// Key fragments that mark a field as a version when its value is a string
/// or a number. `ver` also covers `version` and `versionInfo`, but all
/// three are kept so the candidate set reads as the list it is.
const VERSION_INDICATORS: &[&str] = &["version", "versioninfo", "ver"];

/// Extract package name/version pairs from one parsed document.
///
/// The walk is depth-first and order-sensitive. Each object node is scanned
/// for at most one name and one version candidate (the last matching key in
/// document order wins for each role), the pair is recorded, and then every
/// value is descended into regardless of whether it contributed. A name
/// found deeper in the tree overwrites an earlier entry for the same name.
///
/// A node with a name but no version still counts as a detected package,
/// with an empty-string version. Single-character names are discarded.
///
/// The walk never fails on well-formed [`Value`]s and performs no I/O;
/// parse failures are the caller's concern.
#[must_use]
pub fn extract_packages(root: &Value) -> BTreeMap<String, String> {
    let mut found = BTreeMap::new();
    walk(root, &mut found);
    found
}

fn walk(node: &Value, found: &mut BTreeMap<String, String>) {
    match node {
        Value::Object(fields) => {
            let mut name: Option<&str> = None;
            let mut version: Option<String> = None;

            for (key, value) in fields {
                let key = key.to_lowercase();
                if NAME_INDICATORS.iter().any(|probe| key.contains(probe)) {
                    if let Value::String(text) = value {
                        name = Some(text);
                    }
                }
                if VERSION_INDICATORS.iter().any(|probe| key.contains(probe)) {
                    match value {
                        Value::String(text) => version = Some(text.clone()),
                        Value::Number(number) => version = Some(number.to_string()),
                        _ => {}
                    }
                }
            }

            if let Some(name) = name {
                if name.chars().count() > 1 {
                    found.insert(name.to_string(), version.unwrap_or_default());
                }
            }

            for value in fields.values() {
                walk(value, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, found);
            }
        }
        // Scalars terminate the recursion
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn pairs(value: Value) -> Vec<(String, String)> {
        extract_packages(&value).into_iter().collect()
    }

    #[test]
    fn flat_record() {
        let doc = json!({"name": "libfoo", "version": "1.2"});
        assert_eq!(pairs(doc), vec![("libfoo".into(), "1.2".into())]);
    }

    #[test]
    fn later_sibling_wins_for_same_name() {
        let doc = json!({
            "component": {"name": "libfoo", "version": "1.2"},
            "component2": {"name": "libfoo", "version": "1.3"}
        });
        assert_eq!(pairs(doc), vec![("libfoo".into(), "1.3".into())]);
    }

    #[test]
    fn nested_record_overwrites_parent() {
        let doc = json!({
            "name": "outer",
            "version": "1.0",
            "children": [{"name": "outer", "version": "2.0"}]
        });
        assert_eq!(pairs(doc), vec![("outer".into(), "2.0".into())]);
    }

    #[test]
    fn missing_version_yields_empty_string() {
        let doc = json!({"package": "libbar"});
        assert_eq!(pairs(doc), vec![("libbar".into(), String::new())]);
    }

    #[test]
    fn short_names_discarded() {
        let doc = json!({"name": "x", "version": "1.0"});
        assert!(pairs(doc).is_empty());
    }

    #[test]
    fn non_string_name_ignored() {
        let doc = json!({"name": ["libfoo"], "version": "1.0"});
        assert!(pairs(doc).is_empty());
    }

    #[test]
    fn numeric_versions_coerced() {
        let doc = json!({"name": "libnum", "version": 3});
        assert_eq!(pairs(doc), vec![("libnum".into(), "3".into())]);

        let doc = json!({"name": "libnum", "version": 1.5});
        assert_eq!(pairs(doc), vec![("libnum".into(), "1.5".into())]);
    }

    #[test]
    fn boolean_is_not_a_version() {
        let doc = json!({"name": "libflag", "version": true});
        assert_eq!(pairs(doc), vec![("libflag".into(), String::new())]);
    }

    #[test]
    fn last_matching_key_wins_within_a_node() {
        // `package` is scanned after `name`, so it supplies the name;
        // `versionInfo` is scanned after `version`, so it supplies the
        // version.
        let doc = json!({
            "name": "first",
            "package": "second",
            "version": "1.0",
            "versionInfo": "2.0"
        });
        assert_eq!(pairs(doc), vec![("second".into(), "2.0".into())]);
    }

    #[test]
    fn non_string_candidate_does_not_reset_earlier_match() {
        let doc = json!({"name": "kept", "package": 5, "version": "1.0"});
        assert_eq!(pairs(doc), vec![("kept".into(), "1.0".into())]);
    }

    #[test]
    fn indicators_match_as_substrings_case_insensitively() {
        let doc = json!({
            "dependencies": [
                {"artifactId": "libmaven", "Version": "0.4"},
                {"packageName": "libnpm", "versionInfo": "2.2.0"}
            ]
        });
        assert_eq!(
            pairs(doc),
            vec![
                ("libmaven".into(), "0.4".into()),
                ("libnpm".into(), "2.2.0".into())
            ]
        );
    }

    #[test]
    fn scalars_and_empty_documents_yield_nothing() {
        assert!(pairs(json!(null)).is_empty());
        assert!(pairs(json!("libfoo")).is_empty());
        assert!(pairs(json!([1, 2, 3])).is_empty());
        assert!(pairs(json!({})).is_empty());
    }

    #[test]
    fn records_found_at_any_depth() {
        let doc = json!({
            "metadata": {"component": {"name": "app-root", "version": "0.1"}},
            "components": [
                {"name": "libfoo", "version": "1.0"},
                {"group": {"name": "libbar"}}
            ]
        });
        assert_eq!(
            pairs(doc),
            vec![
                ("app-root".into(), "0.1".into()),
                ("libbar".into(), String::new()),
                ("libfoo".into(), "1.0".into())
            ]
        );
    }
}
