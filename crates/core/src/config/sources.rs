use crate::bundle::Locale;
use std::fmt;
use std::path::PathBuf;

/// Environment variable selecting the active locale
pub const LOCALE_ENV_VAR: &str = "STAGEWIRE_LOCALE";

/// Environment variable selecting the bundle directory
pub const BUNDLE_DIR_ENV_VAR: &str = "STAGEWIRE_BUNDLE_DIR";

const DEFAULT_LOCALE: &str = "en";
const DEFAULT_BUNDLE_DIR: &str = "./i18n";

/// Where a configuration value came from, for debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value loaded from an environment variable
    EnvVar(String),
    /// Default value used
    Default(String),
}

impl ConfigSource {
    /// Check if source is an environment variable
    pub fn is_env_var(&self) -> bool {
        matches!(self, ConfigSource::EnvVar(_))
    }

    /// Check if source is a default value
    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Default(_))
    }

    /// Get source description
    pub fn description(&self) -> String {
        match self {
            ConfigSource::EnvVar(var) => format!("Environment variable: {}", var),
            ConfigSource::Default(value) => format!("Default value: {}", value),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Process-ambient configuration for the bridge
///
/// Only two knobs exist: the active locale used when resolving resource
/// bundles, and the directory bundle files are read from. Both come from the
/// environment with documented defaults; there is no config file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    locale: Locale,
    locale_source: ConfigSource,
    bundle_dir: PathBuf,
    bundle_dir_source: ConfigSource,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// The locale is taken from `STAGEWIRE_LOCALE`, then from the `LANG`
    /// prefix, then defaults to `en`. The bundle directory is taken from
    /// `STAGEWIRE_BUNDLE_DIR`, defaulting to `./i18n`.
    pub fn from_env() -> Self {
        let (locale, locale_source) = match std::env::var(LOCALE_ENV_VAR) {
            Ok(tag) => (Locale::parse(&tag), ConfigSource::EnvVar(LOCALE_ENV_VAR.to_string())),
            Err(_) => match std::env::var("LANG") {
                Ok(tag) if !tag.is_empty() && tag != "C" => {
                    (Locale::parse(&tag), ConfigSource::EnvVar("LANG".to_string()))
                }
                _ => (
                    Locale::parse(DEFAULT_LOCALE),
                    ConfigSource::Default(DEFAULT_LOCALE.to_string()),
                ),
            },
        };

        let (bundle_dir, bundle_dir_source) = match std::env::var(BUNDLE_DIR_ENV_VAR) {
            Ok(dir) => (
                PathBuf::from(dir),
                ConfigSource::EnvVar(BUNDLE_DIR_ENV_VAR.to_string()),
            ),
            Err(_) => (
                PathBuf::from(DEFAULT_BUNDLE_DIR),
                ConfigSource::Default(DEFAULT_BUNDLE_DIR.to_string()),
            ),
        };

        Self {
            locale,
            locale_source,
            bundle_dir,
            bundle_dir_source,
        }
    }

    /// Build a configuration with explicit values
    pub fn new(locale: Locale, bundle_dir: impl Into<PathBuf>) -> Self {
        Self {
            locale,
            locale_source: ConfigSource::Default("programmatic".to_string()),
            bundle_dir: bundle_dir.into(),
            bundle_dir_source: ConfigSource::Default("programmatic".to_string()),
        }
    }

    /// Active locale
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Source the locale was loaded from
    pub fn locale_source(&self) -> &ConfigSource {
        &self.locale_source
    }

    /// Directory bundle files are read from
    pub fn bundle_dir(&self) -> &PathBuf {
        &self.bundle_dir
    }

    /// Source the bundle directory was loaded from
    pub fn bundle_dir_source(&self) -> &ConfigSource {
        &self.bundle_dir_source
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
