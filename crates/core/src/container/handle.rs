use crate::app::application::Application;
use crate::container::descriptor::ControllerType;
use crate::container::registry::ControllerRegistry;
use crate::errors::CoreError;
use std::any::Any;
use std::sync::Arc;

/// Read-only handle to the bootstrapped container
///
/// Created once by [`Bootstrap::initialize`](crate::container::Bootstrap)
/// and shared by every consumer afterwards. No registration happens through
/// the handle; the registry is sealed when the handle is handed out.
#[derive(Clone)]
pub struct ContainerHandle {
    registry: Arc<ControllerRegistry>,
}

impl ContainerHandle {
    pub(crate) fn new(registry: ControllerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Resolve a controller by type
    pub fn resolve<T>(&self) -> Result<Arc<T>, CoreError>
    where
        T: Send + Sync + 'static,
    {
        self.registry.resolve::<T>()
    }

    /// Try to resolve a controller, returning `None` if not registered
    pub fn try_resolve<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.registry.try_resolve::<T>()
    }

    /// Resolve a controller from a request descriptor
    pub fn resolve_dyn(
        &self,
        request: &ControllerType,
    ) -> Result<Arc<dyn Any + Send + Sync>, CoreError> {
        self.registry.resolve_dyn(request)
    }

    /// Check if a controller type is registered
    pub fn contains<T>(&self) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.registry.contains::<T>()
    }

    /// Number of registered controllers
    pub fn controller_count(&self) -> usize {
        self.registry.controller_count()
    }

    /// All registered application implementations
    pub fn application_bindings(&self) -> Result<Vec<Arc<dyn Application>>, CoreError> {
        self.registry.application_bindings()
    }
}

impl std::fmt::Debug for ContainerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerHandle")
            .field("controller_count", &self.controller_count())
            .finish()
    }
}
