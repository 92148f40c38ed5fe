//! Field helpers for untyped request payloads.
//!
//! Widget content arrives as arbitrary JSON. These helpers pull individual
//! fields out of it and report the first violation as a [`CoreError`].

use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Fetch a required, non-empty string field from `content`.
///
/// Absent, `null` and `""` all count as missing. A non-string value is a
/// validation error.
pub fn required_str(content: &Value, widget: &'static str, field: &'static str) -> CoreResult<String> {
    match content.get(field) {
        None | Some(Value::Null) => Err(CoreError::MissingField { widget, field }),
        Some(Value::String(s)) if s.is_empty() => Err(CoreError::MissingField { widget, field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(CoreError::Validation(format!(
            "`content.{field}` must be a string, got {}",
            json_kind(other)
        ))),
    }
}

/// Fetch an optional string field. Absent and `null` both yield `None`.
pub fn optional_str(content: &Value, field: &'static str) -> CoreResult<Option<String>> {
    match content.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(CoreError::Validation(format!(
            "`content.{field}` must be a string, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn required_str_returns_value() {
        let content = json!({ "title": "Sales" });
        assert_eq!(required_str(&content, "Chart", "title").unwrap(), "Sales");
    }

    #[test]
    fn required_str_treats_absent_null_and_empty_as_missing() {
        for content in [json!({}), json!({ "title": null }), json!({ "title": "" })] {
            assert_matches!(
                required_str(&content, "Chart", "title"),
                Err(CoreError::MissingField { widget: "Chart", field: "title" })
            );
        }
    }

    #[test]
    fn required_str_on_non_object_content_is_missing() {
        assert_matches!(
            required_str(&json!("just text"), "Text", "text"),
            Err(CoreError::MissingField { .. })
        );
    }

    #[test]
    fn required_str_rejects_non_strings() {
        let err = required_str(&json!({ "title": 5 }), "Chart", "title").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: `content.title` must be a string, got number"
        );
    }

    #[test]
    fn optional_str_allows_absence() {
        assert_eq!(optional_str(&json!({}), "summary").unwrap(), None);
        assert_eq!(
            optional_str(&json!({ "summary": "s" }), "summary").unwrap(),
            Some("s".to_string())
        );
        assert!(optional_str(&json!({ "summary": [] }), "summary").is_err());
    }
}
