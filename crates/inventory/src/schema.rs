use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::ScanOptions;
use crate::error::{InventoryError, Result};
use crate::scanner::{file_id, SbomScanner};

/// How many characters of a scalar value to keep as a sample
const SAMPLE_LEN: usize = 50;

/// Top-level field survey across a document collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSurvey {
    pub summary: SurveySummary,
    pub files: BTreeMap<String, FileSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySummary {
    pub total_files: usize,
    pub directory: String,
}

/// One file's survey: its top-level fields, or the failure that kept it out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileSchema {
    Fields(BTreeMap<String, FieldProfile>),
    Error { error: String },
}

/// Shape of a single top-level field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProfile {
    /// JSON kind: object, array, string, number, boolean or null
    pub kind: String,

    /// For objects, the keys directly below
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_keys: Option<Vec<String>>,

    /// For arrays, the element count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<usize>,

    /// For arrays of objects, the first element's keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_example_keys: Option<Vec<String>>,

    /// For scalars, a truncated rendering of the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_value: Option<String>,
}

impl FieldProfile {
    fn of(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                kind: "object".to_string(),
                sub_keys: Some(map.keys().cloned().collect()),
                ..Default::default()
            },
            Value::Array(items) => Self {
                kind: "array".to_string(),
                item_count: Some(items.len()),
                item_example_keys: items
                    .first()
                    .and_then(Value::as_object)
                    .map(|first| first.keys().cloned().collect()),
                ..Default::default()
            },
            scalar => Self {
                kind: kind_name(scalar).to_string(),
                sample_value: Some(sample(scalar)),
                ..Default::default()
            },
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn sample(value: &Value) -> String {
    let rendered = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    rendered.chars().take(SAMPLE_LEN).collect()
}

/// Profile the top-level fields of one parsed document
#[must_use]
pub fn survey_document(document: &Value) -> FileSchema {
    let Value::Object(fields) = document else {
        return FileSchema::Error {
            error: "document root is not an object".to_string(),
        };
    };

    FileSchema::Fields(
        fields
            .iter()
            .map(|(key, value)| (key.clone(), FieldProfile::of(value)))
            .collect(),
    )
}

/// Survey every document under `dir`.
///
/// Read and parse failures become error entries for the affected file; the
/// survey itself only fails on a missing or invalid root.
pub fn survey_directory(dir: impl AsRef<Path>, options: &ScanOptions) -> Result<SchemaSurvey> {
    let dir = dir.as_ref();
    options.validate()?;

    let meta = fs::metadata(dir)?;
    if !meta.is_dir() {
        return Err(InventoryError::NotADirectory(dir.display().to_string()));
    }

    let mut files = BTreeMap::new();
    for path in SbomScanner::new(dir, options.clone()).scan() {
        let schema = match fs::read_to_string(&path) {
            Ok(source) => match serde_json::from_str::<Value>(&source) {
                Ok(document) => survey_document(&document),
                Err(err) => FileSchema::Error {
                    error: err.to_string(),
                },
            },
            Err(err) => FileSchema::Error {
                error: err.to_string(),
            },
        };
        files.insert(file_id(dir, &path), schema);
    }

    Ok(SchemaSurvey {
        summary: SurveySummary {
            total_files: files.len(),
            directory: dir.display().to_string(),
        },
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn object_fields_list_sub_keys() {
        let doc = json!({"metadata": {"component": {}, "timestamp": "now"}});
        let FileSchema::Fields(fields) = survey_document(&doc) else {
            panic!("expected fields");
        };

        let metadata = &fields["metadata"];
        assert_eq!(metadata.kind, "object");
        assert_eq!(
            metadata.sub_keys.as_deref(),
            Some(&["component".to_string(), "timestamp".to_string()][..])
        );
    }

    #[test]
    fn array_fields_record_count_and_example_keys() {
        let doc = json!({"components": [{"name": "libfoo", "version": "1.0"}, {"name": "libbar"}]});
        let FileSchema::Fields(fields) = survey_document(&doc) else {
            panic!("expected fields");
        };

        let components = &fields["components"];
        assert_eq!(components.kind, "array");
        assert_eq!(components.item_count, Some(2));
        assert_eq!(
            components.item_example_keys.as_deref(),
            Some(&["name".to_string(), "version".to_string()][..])
        );
    }

    #[test]
    fn scalar_fields_keep_a_truncated_sample() {
        let long = "x".repeat(80);
        let doc = json!({"spec_version": 1.4, "serial": long, "signed": false});
        let FileSchema::Fields(fields) = survey_document(&doc) else {
            panic!("expected fields");
        };

        assert_eq!(fields["spec_version"].kind, "number");
        assert_eq!(fields["spec_version"].sample_value.as_deref(), Some("1.4"));
        assert_eq!(fields["signed"].kind, "boolean");
        assert_eq!(fields["serial"].sample_value.as_ref().unwrap().len(), 50);
    }

    #[test]
    fn non_object_root_is_an_error_entry() {
        assert!(matches!(
            survey_document(&json!([1, 2, 3])),
            FileSchema::Error { .. }
        ));
    }

    #[test]
    fn survey_serializes_without_empty_options() {
        let doc = json!({"version": "1.0"});
        let rendered = serde_json::to_string(&survey_document(&doc)).unwrap();
        assert!(rendered.contains("\"kind\":\"string\""));
        assert!(!rendered.contains("sub_keys"));
    }
}
