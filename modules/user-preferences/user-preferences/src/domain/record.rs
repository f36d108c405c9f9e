//! Backing record model.
//!
//! One `PreferenceRecord` stores one preference key/value pair of one user.

use serde_json::{Map, Value};

/// Group/version/kind descriptor of the backing resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl ResourceKind {
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// `group/version`, or just `version` for the core group.
    #[must_use]
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

/// Record metadata. Passed through untouched on update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordMetadata {
    pub api_version: String,
    pub kind: String,
    /// Assigned by the store on every write; used for optimistic concurrency.
    pub resource_version: Option<String>,
    /// Out-of-band fields (labels, annotations, owner references, ...).
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceRecord {
    /// The preference key; unique within one user's records.
    pub name: String,
    /// Raw stored value. Normally a JSON string.
    pub value: Option<Value>,
    pub metadata: RecordMetadata,
}

impl PreferenceRecord {
    /// Builds a record that has not been persisted yet.
    #[must_use]
    pub fn new(kind: &ResourceKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(Value::String(value.into())),
            metadata: RecordMetadata {
                api_version: kind.api_version(),
                kind: kind.kind.clone(),
                resource_version: None,
                extra: Map::new(),
            },
        }
    }

    /// The stored value coerced to a string.
    #[must_use]
    pub fn value_string(&self) -> String {
        self.value.as_ref().map(coerce_to_string).unwrap_or_default()
    }
}

/// Coerces a loosely typed JSON value to the string form used for
/// preference values. Never fails: `null` becomes `""`, scalars use their
/// JSON text, arrays and objects their compact JSON encoding.
#[must_use]
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_version_with_group() {
        let kind = ResourceKind::new("management.cattle.io", "v3", "Preference");
        assert_eq!(kind.api_version(), "management.cattle.io/v3");
    }

    #[test]
    fn test_api_version_core_group() {
        let kind = ResourceKind::new("", "v1", "ConfigMap");
        assert_eq!(kind.api_version(), "v1");
    }

    #[test]
    fn test_new_record_is_tagged_with_kind() {
        let kind = ResourceKind::new("management.cattle.io", "v3", "Preference");
        let record = PreferenceRecord::new(&kind, "theme", "dark");

        assert_eq!(record.name, "theme");
        assert_eq!(record.value, Some(json!("dark")));
        assert_eq!(record.metadata.api_version, "management.cattle.io/v3");
        assert_eq!(record.metadata.kind, "Preference");
        assert!(record.metadata.resource_version.is_none());
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(coerce_to_string(&json!("dark")), "dark");
        assert_eq!(coerce_to_string(&json!(null)), "");
        assert_eq!(coerce_to_string(&json!(true)), "true");
        assert_eq!(coerce_to_string(&json!(1)), "1");
        assert_eq!(coerce_to_string(&json!(1.5)), "1.5");
        assert_eq!(coerce_to_string(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(coerce_to_string(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_missing_value_coerces_to_empty() {
        let kind = ResourceKind::new("g", "v1", "K");
        let mut record = PreferenceRecord::new(&kind, "k", "v");
        record.value = None;
        assert_eq!(record.value_string(), "");
    }
}
