use std::fmt;

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

/// Insertion-ordered mapping from attribute key to selected value.
///
/// Product default attributes (e.g., `{"pa_color": "Red", "custom": "Blue"}`)
/// keep the order they were declared in. Output maps built by the resolver
/// follow the same order, so results are reproducible.
///
/// Deserialization goes through `serde_json::Map`, which keeps document order
/// because the crate enables serde_json's `preserve_order` feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl TryFrom<Map<String, Value>> for AttributeMap {
    type Error = String;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut map = Self::new();
        for (key, value) in object {
            match value {
                Value::String(value) => {
                    map.insert(key, value);
                }
                other => {
                    return Err(format!(
                        "attribute \"{}\" must have a string value, found {}",
                        key, other
                    ));
                }
            }
        }
        Ok(map)
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}

/// Default attributes resolved for each language.
///
/// Keyed by language slug in the order languages were resolved. Every
/// language that was asked for is present, even when its map is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultAttributeTranslations {
    languages: Vec<(String, AttributeMap)>,
}

impl DefaultAttributeTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the map for a language, replacing any previous one in place.
    pub fn insert(&mut self, language: impl Into<String>, attributes: AttributeMap) {
        let language = language.into();
        match self.languages.iter_mut().find(|(l, _)| *l == language) {
            Some((_, existing)) => *existing = attributes,
            None => self.languages.push((language, attributes)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&AttributeMap> {
        self.languages
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, attributes)| attributes)
    }

    pub fn get_mut(&mut self, language: &str) -> Option<&mut AttributeMap> {
        self.languages
            .iter_mut()
            .find(|(l, _)| l == language)
            .map(|(_, attributes)| attributes)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeMap)> {
        self.languages.iter().map(|(l, a)| (l.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Drop one language from the result.
    ///
    /// Callers use this to leave out the default language; the resolver
    /// itself always includes it.
    pub fn without_language(mut self, language: &str) -> Self {
        self.languages.retain(|(l, _)| l != language);
        self
    }
}

impl Serialize for DefaultAttributeTranslations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.languages.len()))?;
        for (language, attributes) in &self.languages {
            map.serialize_entry(language, attributes)?;
        }
        map.end()
    }
}
