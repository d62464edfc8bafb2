use crate::container::descriptor::ControllerType;
use crate::container::handle::ContainerHandle;
use crate::errors::CoreError;
use std::any::Any;
use std::sync::Arc;

/// Resolves view controllers from the container
///
/// This is the bridge the view loader calls instead of constructing
/// controllers itself. An unresolvable type aborts the enclosing view load;
/// there is deliberately no fallback to direct construction, since that would
/// hand out instances the container never wired.
#[derive(Debug, Clone)]
pub struct ControllerResolver {
    container: ContainerHandle,
}

impl ControllerResolver {
    /// Create a resolver backed by the given container handle
    pub fn new(container: ContainerHandle) -> Self {
        Self { container }
    }

    /// Resolve a controller by type
    pub fn resolve<T>(&self) -> Result<Arc<T>, CoreError>
    where
        T: Send + Sync + 'static,
    {
        self.container.resolve::<T>()
    }

    /// Resolve a controller from a loader request
    pub fn resolve_dyn(
        &self,
        request: &ControllerType,
    ) -> Result<Arc<dyn Any + Send + Sync>, CoreError> {
        tracing::debug!("Resolving controller '{}' from container", request.name());
        self.container.resolve_dyn(request).map_err(|err| {
            tracing::error!("Controller resolution failed: {}", err);
            err
        })
    }

    /// The container handle backing this resolver
    pub fn container(&self) -> &ContainerHandle {
        &self.container
    }
}
