use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale identifier with a language tag and an optional region
///
/// Parsed from strings such as `"en"`, `"de_DE"` or `"pt-BR"`. Region casing
/// is normalized to upper case and the language to lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Create a locale from a language tag only
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: None,
        }
    }

    /// Create a locale with a language and region
    pub fn with_region(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: Some(region.into().to_uppercase()),
        }
    }

    /// Parse a locale from a tag such as `de_DE` or `pt-BR`
    ///
    /// Anything after a second separator (encoding or variant suffixes such
    /// as `en_US.UTF-8`) is ignored.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.split('.').next().unwrap_or(tag);
        let mut parts = tag.split(['_', '-']).filter(|p| !p.is_empty());
        let language = parts.next().unwrap_or("en");
        match parts.next() {
            Some(region) => Self::with_region(language, region),
            None => Self::new(language),
        }
    }

    /// Language tag, lower case
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region tag, upper case, if present
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The lookup chain from most to least specific
    ///
    /// `de_DE` yields `[de_DE, de]`; a plain `de` yields `[de]`.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = vec![self.clone()];
        if self.region.is_some() {
            chain.push(Locale::new(self.language.clone()));
        }
        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}
