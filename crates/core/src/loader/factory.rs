use crate::bundle::{BundleMarker, BundleProvider, JsonBundleProvider, Locale};
use crate::config::AppConfig;
use crate::container::resolver::ControllerResolver;
use crate::errors::CoreError;
use crate::loader::view_loader::{ControllerFactory, ViewLoader};
use std::sync::Arc;

/// Produces configured view loaders
///
/// Every loader gets its controller-construction hook bound to the
/// container-backed [`ControllerResolver`] and, when a [`BundleMarker`] is
/// given at creation time, a resource bundle resolved for the active locale.
pub struct ViewLoaderFactory {
    resolver: ControllerResolver,
    bundle_provider: Box<dyn BundleProvider>,
    locale: Locale,
}

impl ViewLoaderFactory {
    /// Create a factory with an explicit bundle provider and locale
    pub fn new(
        resolver: ControllerResolver,
        bundle_provider: Box<dyn BundleProvider>,
        locale: Locale,
    ) -> Self {
        Self {
            resolver,
            bundle_provider,
            locale,
        }
    }

    /// Create a factory reading JSON bundles per the ambient configuration
    pub fn from_config(resolver: ControllerResolver, config: &AppConfig) -> Self {
        Self::new(
            resolver,
            Box::new(JsonBundleProvider::new(config.bundle_dir())),
            config.locale().clone(),
        )
    }

    /// The locale bundles are resolved for
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Create a loader for the given request site
    ///
    /// A marker selects the bundle to attach; a failed bundle lookup fails
    /// loader creation. No marker means no bundle, which is a fully
    /// supported state.
    pub fn create_loader(&self, marker: Option<&BundleMarker>) -> Result<ViewLoader, CoreError> {
        let resource_bundle = match marker {
            Some(marker) => {
                let bundle = self.bundle_provider.load(marker.name(), &self.locale)?;
                tracing::debug!(
                    "Attached bundle '{}' ({} entries) to view loader",
                    marker.name(),
                    bundle.len()
                );
                Some(Arc::new(bundle))
            }
            None => None,
        };

        let resolver = self.resolver.clone();
        let controller_factory: ControllerFactory =
            Arc::new(move |request| resolver.resolve_dyn(request));

        Ok(ViewLoader::new(controller_factory, resource_bundle))
    }
}

impl std::fmt::Debug for ViewLoaderFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewLoaderFactory")
            .field("locale", &self.locale)
            .finish()
    }
}
