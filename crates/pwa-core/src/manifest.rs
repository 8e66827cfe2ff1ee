//! Web app manifest document and its canonical encoding
//!
//! A [`ManifestSpec`] is an insertion-ordered mapping of manifest keys to
//! JSON values. Canonicalization pins `start_url` and `icons` to the end of
//! the document so repeated runs over unchanged configuration produce
//! byte-identical output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{DEFAULT_START_URL, KEY_ICONS, KEY_START_URL};
use crate::error::Result;

/// An insertion-ordered web app manifest document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestSpec {
    entries: Map<String, Value>,
}

impl ManifestSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key; appended at the end unless the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Keys in serialization order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Whether `icons` is present and non-empty.
    ///
    /// An absent key, a `null`, and an empty array all count as missing.
    pub fn has_icons(&self) -> bool {
        match self.entries.get(KEY_ICONS) {
            None | Some(Value::Null) => false,
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
        }
    }

    /// Rebuild the document with `start_url` and `icons` pinned last.
    ///
    /// All other keys keep their original relative order. `start_url`
    /// falls back to `"/"` when absent, null, or an empty string; `icons`
    /// falls back to an empty array. The mapping is rebuilt rather than
    /// mutated in place so the result is independent of any map removal
    /// semantics.
    pub fn canonicalize(&self) -> Self {
        let start_url = match self.entries.get(KEY_START_URL) {
            None | Some(Value::Null) => Value::String(DEFAULT_START_URL.to_string()),
            Some(Value::String(s)) if s.is_empty() => {
                Value::String(DEFAULT_START_URL.to_string())
            }
            Some(other) => other.clone(),
        };
        let icons = match self.entries.get(KEY_ICONS) {
            None | Some(Value::Null) => Value::Array(Vec::new()),
            Some(other) => other.clone(),
        };

        let mut entries = Map::new();
        for (key, value) in &self.entries {
            if key != KEY_START_URL && key != KEY_ICONS {
                entries.insert(key.clone(), value.clone());
            }
        }
        entries.insert(KEY_START_URL.to_string(), start_url);
        entries.insert(KEY_ICONS.to_string(), icons);

        Self { entries }
    }

    /// Encode the document as pretty-printed JSON with a trailing newline.
    ///
    /// `serde_json` never escapes `/`, so icon paths come out verbatim.
    pub fn to_json(&self) -> Result<String> {
        let mut encoded = serde_json::to_string_pretty(&self.entries)?;
        encoded.push('\n');
        Ok(encoded)
    }
}

impl From<Map<String, Value>> for ManifestSpec {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Value)> for ManifestSpec {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn spec_from(value: Value) -> ManifestSpec {
        match value {
            Value::Object(map) => ManifestSpec::from(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_canonicalize_pins_start_url_and_icons_last() {
        let spec = spec_from(json!({
            "icons": [{"src": "/logo.png"}],
            "name": "App",
            "start_url": "/home",
            "display": "standalone"
        }));

        let canonical = spec.canonicalize();
        let keys: Vec<&str> = canonical.keys().collect();
        assert_eq!(keys, vec!["name", "display", "start_url", "icons"]);
    }

    #[test]
    fn test_canonicalize_defaults_start_url() {
        let spec = spec_from(json!({"name": "App"}));
        let canonical = spec.canonicalize();
        assert_eq!(canonical.get("start_url"), Some(&json!("/")));
        assert_eq!(canonical.get("icons"), Some(&json!([])));
    }

    #[test]
    fn test_canonicalize_defaults_empty_start_url() {
        let spec = spec_from(json!({"name": "App", "start_url": ""}));
        assert_eq!(spec.canonicalize().get("start_url"), Some(&json!("/")));
    }

    #[test]
    fn test_canonicalize_is_stable() {
        let spec = spec_from(json!({
            "name": "App",
            "start_url": "/home",
            "icons": [{"src": "/logo.png", "sizes": "512x512"}]
        }));

        let first = spec.canonicalize().to_json().unwrap();
        let second = spec.canonicalize().canonicalize().to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_json_does_not_escape_slashes() {
        let spec = spec_from(json!({"icons": [{"src": "/img/logo.png"}]}));
        let encoded = spec.canonicalize().to_json().unwrap();
        assert!(encoded.contains("/img/logo.png"));
        assert!(!encoded.contains("\\/"));
    }

    #[test]
    fn test_to_json_pretty_printed_with_trailing_newline() {
        let spec = spec_from(json!({"name": "App", "icons": [{"src": "/logo.png"}]}));
        let encoded = spec.canonicalize().to_json().unwrap();
        assert!(encoded.contains("{\n  \"name\": \"App\""));
        assert!(encoded.ends_with("\n"));
    }

    #[test]
    fn test_has_icons() {
        assert!(!spec_from(json!({"name": "App"})).has_icons());
        assert!(!spec_from(json!({"icons": []})).has_icons());
        assert!(!spec_from(json!({"icons": null})).has_icons());
        assert!(spec_from(json!({"icons": [{"src": "/logo.png"}]})).has_icons());
    }
}
