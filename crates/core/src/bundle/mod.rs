pub mod locale;
pub mod marker;
pub mod provider;
pub mod resource;

pub use locale::Locale;
pub use marker::BundleMarker;
pub use provider::{BundleProvider, JsonBundleProvider, StaticBundleProvider};
pub use resource::ResourceBundle;
