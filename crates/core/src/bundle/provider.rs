use crate::bundle::locale::Locale;
use crate::bundle::resource::ResourceBundle;
use crate::errors::CoreError;
use std::collections::HashMap;
use std::path::PathBuf;

/// Boundary to the external resource-bundle lookup mechanism
pub trait BundleProvider: Send + Sync {
    /// Load the bundle with the given base name for the given locale
    ///
    /// Returns `CoreError::BundleNotFound` when no bundle exists for the
    /// base name after locale fallback has been exhausted.
    fn load(&self, base_name: &str, locale: &Locale) -> Result<ResourceBundle, CoreError>;
}

/// Loads bundles from JSON files in a directory
///
/// For base name `messages` and locale `de_DE`, the files `messages.json`,
/// `messages_de.json` and `messages_de_DE.json` are read in that order, each
/// a flat string-to-string object. More specific files override keys from
/// more general ones. At least one file must exist.
#[derive(Debug, Clone)]
pub struct JsonBundleProvider {
    dir: PathBuf,
}

impl JsonBundleProvider {
    /// Create a provider rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this provider reads bundle files from
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn candidate_files(&self, base_name: &str, locale: &Locale) -> Vec<PathBuf> {
        // General to specific, so later reads win on merge.
        let mut names = vec![format!("{}.json", base_name)];
        for fallback in locale.fallback_chain().into_iter().rev() {
            names.push(format!("{}_{}.json", base_name, fallback));
        }
        names.into_iter().map(|n| self.dir.join(n)).collect()
    }
}

impl BundleProvider for JsonBundleProvider {
    fn load(&self, base_name: &str, locale: &Locale) -> Result<ResourceBundle, CoreError> {
        let mut entries: HashMap<String, String> = HashMap::new();
        let mut found_any = false;

        for path in self.candidate_files(base_name, locale) {
            if !path.is_file() {
                continue;
            }
            let text = std::fs::read_to_string(&path)?;
            let file_entries: HashMap<String, String> = serde_json::from_str(&text)?;
            entries.extend(file_entries);
            found_any = true;
            tracing::debug!("Loaded bundle file {}", path.display());
        }

        if !found_any {
            return Err(CoreError::bundle_not_found(base_name, locale.to_string()));
        }

        Ok(ResourceBundle::new(base_name, locale.clone(), entries))
    }
}

/// In-memory bundle provider for programmatic bundles and tests
#[derive(Debug, Default)]
pub struct StaticBundleProvider {
    bundles: HashMap<(String, Locale), HashMap<String, String>>,
}

impl StaticBundleProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the entries served for a base name and locale
    pub fn insert(
        &mut self,
        base_name: impl Into<String>,
        locale: Locale,
        entries: HashMap<String, String>,
    ) -> &mut Self {
        self.bundles.insert((base_name.into(), locale), entries);
        self
    }

    /// Register a single key/value pair for a base name and locale
    pub fn insert_entry(
        &mut self,
        base_name: impl Into<String>,
        locale: Locale,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.bundles
            .entry((base_name.into(), locale))
            .or_default()
            .insert(key.into(), value.into());
        self
    }
}

impl BundleProvider for StaticBundleProvider {
    fn load(&self, base_name: &str, locale: &Locale) -> Result<ResourceBundle, CoreError> {
        for fallback in locale.fallback_chain() {
            if let Some(entries) = self.bundles.get(&(base_name.to_string(), fallback.clone())) {
                return Ok(ResourceBundle::new(base_name, fallback, entries.clone()));
            }
        }
        Err(CoreError::bundle_not_found(base_name, locale.to_string()))
    }
}
