use crate::bundle::locale::Locale;
use std::collections::HashMap;

/// A locale-keyed mapping from message keys to localized text
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    base_name: String,
    locale: Locale,
    entries: HashMap<String, String>,
}

impl ResourceBundle {
    /// Create a bundle from already-loaded entries
    pub fn new(
        base_name: impl Into<String>,
        locale: Locale,
        entries: HashMap<String, String>,
    ) -> Self {
        Self {
            base_name: base_name.into(),
            locale,
            entries,
        }
    }

    /// Base name this bundle was loaded from
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Locale this bundle was resolved for
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Look up a localized value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a localized value, falling back to the key itself
    pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Check whether the bundle contains a key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the bundle
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bundle is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
