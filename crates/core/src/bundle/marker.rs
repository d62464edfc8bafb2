use serde::{Deserialize, Serialize};
use std::fmt;

/// Declarative localization marker carried at a loader-creation site
///
/// Holds the base name of the resource bundle to attach, e.g. `"messages"`.
/// A loader created without a marker gets no bundle; that is a fully
/// supported state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BundleMarker(String);

impl BundleMarker {
    /// Create a marker for the given bundle base name
    pub fn new(base_name: impl Into<String>) -> Self {
        Self(base_name.into())
    }

    /// The bundle base name this marker selects
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BundleMarker {
    fn from(base_name: &str) -> Self {
        Self::new(base_name)
    }
}
