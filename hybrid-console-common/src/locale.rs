//! Localization dictionary and the backend mode label resolver.
//!
//! Translation files are nested JSON objects (`{"status": {"kernel": "内核"}}`)
//! flattened into dotted keys (`status.kernel`). Every lookup in the UI carries
//! an in-code English literal, so an empty dictionary is a complete English
//! locale.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Label shown when the device reports no backend mode.
pub const UNKNOWN_MODE: &str = "Unknown";

/// Flat map of namespaced translation keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// The built-in English locale (all literals apply).
    pub fn english() -> Self {
        Self::default()
    }

    /// Parse a nested JSON translation document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(Error::Config(
                "Translation file must contain a JSON object".to_string(),
            ));
        }

        let mut dictionary = Self::default();
        flatten("", &value, &mut dictionary.entries);
        Ok(dictionary)
    }

    /// Load a translation file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read translation file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let dictionary = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), keys = dictionary.len(), "Loaded translations");
        Ok(dictionary)
    }

    /// Insert or replace a single entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`Dictionary::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a key. Empty translations count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Look up a key, falling back to the given literal.
    pub fn text(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or(fallback).to_string()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}

/// Human-readable label for a raw backend mode.
///
/// Absent or empty input yields [`UNKNOWN_MODE`]. Otherwise `mode_<raw>` is
/// looked up (at the top level, then under `config.`); a missing entry falls
/// back to the raw mode upper-cased.
pub fn resolve_mode_label(raw: Option<&str>, dictionary: &Dictionary) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return UNKNOWN_MODE.to_string();
    };

    let key = format!("mode_{}", raw);
    dictionary
        .get(&key)
        .or_else(|| dictionary.get(&format!("config.{}", key)))
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absent_mode() {
        let dict = Dictionary::english();
        assert_eq!(resolve_mode_label(None, &dict), "Unknown");
        assert_eq!(resolve_mode_label(Some(""), &dict), "Unknown");
    }

    #[test]
    fn test_resolve_localized_mode() {
        let dict = Dictionary::english().with("mode_auto", "Overlay");
        assert_eq!(resolve_mode_label(Some("auto"), &dict), "Overlay");
    }

    #[test]
    fn test_resolve_config_namespaced_mode() {
        let dict = Dictionary::from_json_str(r#"{"config": {"mode_tmpfs": "Tmpfs (RAM)"}}"#).unwrap();
        assert_eq!(resolve_mode_label(Some("tmpfs"), &dict), "Tmpfs (RAM)");
    }

    #[test]
    fn test_resolve_unlocalized_mode() {
        let dict = Dictionary::english();
        assert_eq!(resolve_mode_label(Some("xyz"), &dict), "XYZ");
        assert_eq!(resolve_mode_label(Some("erofs"), &dict), "EROFS");
    }

    #[test]
    fn test_flatten_nested() {
        let dict = Dictionary::from_json_str(
            r#"{
                "status": { "kernel": "Kernel", "nested": { "deep": "Deep" } },
                "common": { "cancel": "Abbrechen", "count": 3 },
                "mode_magic": "Magic Mount"
            }"#,
        )
        .unwrap();

        assert_eq!(dict.get("status.kernel"), Some("Kernel"));
        assert_eq!(dict.get("status.nested.deep"), Some("Deep"));
        assert_eq!(dict.get("common.cancel"), Some("Abbrechen"));
        assert_eq!(dict.get("common.count"), None);
        assert_eq!(dict.get("mode_magic"), Some("Magic Mount"));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_text_fallback() {
        let dict = Dictionary::english().with("common.reboot", "");
        assert_eq!(dict.text("common.reboot", "Reboot"), "Reboot");
        assert_eq!(dict.text("common.cancel", "Cancel"), "Cancel");
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            Dictionary::from_json_str("[1, 2]"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Dictionary::from_json_str("{"),
            Err(Error::Json(_))
        ));
    }
}
