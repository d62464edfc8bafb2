pub mod app;
pub mod bundle;
pub mod config;
pub mod container;
pub mod errors;
pub mod foundation;
pub mod loader;

// Re-export key types for convenience (specific exports to avoid ambiguity)
pub use app::{Application, ApplicationLifecycle, HookError, LaunchParameters, Stage};
pub use bundle::{BundleMarker, BundleProvider, JsonBundleProvider, Locale, ResourceBundle, StaticBundleProvider};
pub use config::{AppConfig, ConfigSource};
pub use container::{Bootstrap, ContainerHandle, ControllerRegistry, ControllerResolver, ControllerType};
pub use errors::CoreError;
pub use foundation::LifecycleState;
pub use loader::{Charset, ControllerFactory, LoaderContext, ViewEngine, ViewLoader, ViewLoaderFactory, ViewNode, ViewTree};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Framework information
pub const FRAMEWORK_NAME: &str = "stagewire";

/// Get framework version
pub fn version() -> &'static str {
    VERSION
}

/// Get framework name
pub fn name() -> &'static str {
    FRAMEWORK_NAME
}
