//! Ordered key/value settings carried by a project record.
//!
//! Keys may repeat. Lookups return the last value written for a key, while
//! iteration yields every entry in the order it was declared.

use serde::{Deserialize, Serialize};

/// A single `key = value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl Setting {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Insertion-ordered settings list with last-write-wins lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(Vec<Setting>);

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Earlier entries with the same key are kept.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(Setting::new(key, value));
    }

    /// Returns the value of the last entry with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|s| s.key == key)
            .map(|s| s.value.as_str())
    }

    /// Returns every value declared under `key`, in declaration order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |s| s.key == key)
            .map(|s| s.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Setting> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| Setting::new(k, v)).collect())
    }
}

impl<'a> IntoIterator for &'a Settings {
    type Item = &'a Setting;
    type IntoIter = std::slice::Iter<'a, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_write() {
        let s: Settings = [("k", "first"), ("other", "x"), ("k", "second")]
            .into_iter()
            .collect();
        assert_eq!(s.get("k"), Some("second"));
        assert_eq!(s.get("missing"), None);
    }

    #[test]
    fn values_keep_declaration_order() {
        let s: Settings = [("t", "a"), ("k", "x"), ("t", "b"), ("t", "a")]
            .into_iter()
            .collect();
        let got: Vec<&str> = s.values("t").collect();
        assert_eq!(got, vec!["a", "b", "a"]);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn iteration_yields_every_entry_in_order() {
        let mut s = Settings::new();
        s.push("k", "1");
        s.push("j", "2");
        s.push("k", "3");
        let keys: Vec<&str> = s.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["k", "j", "k"]);
        let values: Vec<&str> = (&s).into_iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3"]);
    }

    #[test]
    fn deserializes_from_entry_list() {
        let json = r#"[{"key":"k","value":"1"},{"key":"k","value":"2"}]"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.get("k"), Some("2"));
    }
}
