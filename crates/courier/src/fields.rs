//! Optional field access over loosely-typed JSON
//!
//! Service hook payloads differ between event types and API versions, so no
//! field is assumed present. Every read names its fallback explicitly:
//!
//! ```rust
//! use courier::fields::Fields;
//! use serde_json::json;
//!
//! let payload = json!({"resource": {"fields": {"System.Title": "Fix login"}}});
//! let fields = Fields::new(&payload);
//! assert_eq!(fields.text_or(&["resource", "fields", "System.Title"], "N/A"), "Fix login");
//! assert_eq!(fields.text_or(&["resource", "rev"], "N/A"), "N/A");
//! ```

use serde_json::Value;

/// Read-only view over a JSON tree
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    root: &'a Value,
}

impl<'a> Fields<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Walk a path of object keys. `null` counts as absent.
    pub fn get(&self, path: &[&str]) -> Option<&'a Value> {
        path.iter()
            .try_fold(self.root, |node, key| node.as_object()?.get(*key))
            .filter(|value| !value.is_null())
    }

    /// A nested view rooted at `path`, or an empty view
    pub fn at(&self, path: &[&str]) -> Fields<'a> {
        Fields::new(self.get(path).unwrap_or(&Value::Null))
    }

    /// Display text for the value at `path`, if present
    pub fn text(&self, path: &[&str]) -> Option<String> {
        self.get(path).map(display_text)
    }

    /// Display text for the value at `path`, ignoring empty strings
    pub fn non_empty_text(&self, path: &[&str]) -> Option<String> {
        self.text(path).filter(|text| !text.is_empty())
    }

    pub fn text_or(&self, path: &[&str], default: &str) -> String {
        self.text(path).unwrap_or_else(|| default.to_string())
    }
}

/// Strings verbatim, scalars via their JSON text, containers as compact JSON
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let payload = json!({"resource": {"fields": {"System.ChangedBy": {"displayName": "Ada"}}}});
        let fields = Fields::new(&payload);
        assert_eq!(
            fields.text(&["resource", "fields", "System.ChangedBy", "displayName"]),
            Some("Ada".to_string())
        );
    }

    #[test]
    fn test_numbers_render_as_text() {
        let payload = json!({"resource": {"id": 42, "rev": 3, "done": true}});
        let resource = Fields::new(&payload).at(&["resource"]);
        assert_eq!(resource.text_or(&["id"], "N/A"), "42");
        assert_eq!(resource.text_or(&["rev"], "N/A"), "3");
        assert_eq!(resource.text_or(&["done"], "N/A"), "true");
    }

    #[test]
    fn test_null_and_missing_use_default() {
        let payload = json!({"resource": {"title": null}});
        let fields = Fields::new(&payload);
        assert_eq!(fields.text_or(&["resource", "title"], "N/A"), "N/A");
        assert_eq!(fields.text_or(&["resource", "nope", "deeper"], "N/A"), "N/A");
    }

    #[test]
    fn test_non_object_intermediate_is_absent() {
        let payload = json!({"resource": "just a string"});
        let fields = Fields::new(&payload);
        assert_eq!(fields.get(&["resource", "id"]), None);
        assert!(fields.at(&["resource", "fields"]).get(&["x"]).is_none());
    }

    #[test]
    fn test_non_empty_text_skips_empty_strings() {
        let payload = json!({"project": ""});
        let fields = Fields::new(&payload);
        assert_eq!(fields.text(&["project"]), Some(String::new()));
        assert_eq!(fields.non_empty_text(&["project"]), None);
    }
}
