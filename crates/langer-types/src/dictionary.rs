use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Nested translation bundle for a single language.
///
/// Leaves are translated strings, sections group related keys. Bundles for
/// different languages do not have to share the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dictionary {
    Text(String),
    Section(BTreeMap<String, Dictionary>),
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::Section(BTreeMap::new())
    }
}

impl Dictionary {
    /// Empty top-level bundle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Dictionary::Text(_) => false,
            Dictionary::Section(entries) => entries.is_empty(),
        }
    }

    /// Direct child by key. `None` on leaves.
    pub fn get(&self, key: &str) -> Option<&Dictionary> {
        match self {
            Dictionary::Text(_) => None,
            Dictionary::Section(entries) => entries.get(key),
        }
    }

    /// Leaf string at a dotted path, e.g. `text("setting.language")`.
    pub fn text(&self, path: &str) -> Option<&str> {
        let mut node = self;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        match node {
            Dictionary::Text(value) => Some(value),
            Dictionary::Section(_) => None,
        }
    }
}

impl TryFrom<serde_json::Value> for Dictionary {
    type Error = serde_json::Error;

    /// Accepts JSON objects whose leaves are all strings.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Dictionary {
        Dictionary::try_from(json!({
            "confirm": "Confirm",
            "cancel": "Cancel",
            "setting": {
                "language": "Language",
                "volume": "Volume",
            },
        }))
        .unwrap()
    }

    #[test]
    fn dotted_path_lookup() {
        let dictionary = sample();
        assert_eq!(dictionary.text("cancel"), Some("Cancel"));
        assert_eq!(dictionary.text("setting.language"), Some("Language"));
        assert_eq!(dictionary.text("setting"), None);
        assert_eq!(dictionary.text("setting.quality"), None);
        assert_eq!(dictionary.text("cancel.nested"), None);
    }

    #[test]
    fn empty_checks() {
        assert!(Dictionary::new().is_empty());
        assert!(!sample().is_empty());
        assert!(!Dictionary::Text("Confirm".into()).is_empty());
    }

    #[test]
    fn rejects_non_string_leaves() {
        assert!(Dictionary::try_from(json!({"retries": 3})).is_err());
        assert!(Dictionary::try_from(json!(["en", "zh"])).is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let dictionary = sample();
        let raw = serde_json::to_value(&dictionary).unwrap();
        assert_eq!(Dictionary::try_from(raw).unwrap(), dictionary);
    }
}
