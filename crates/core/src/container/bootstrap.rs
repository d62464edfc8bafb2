use crate::container::handle::ContainerHandle;
use crate::container::registry::ControllerRegistry;
use crate::errors::CoreError;
use std::sync::atomic::{AtomicBool, Ordering};

static BOOTSTRAPPED: AtomicBool = AtomicBool::new(false);

/// Process-wide container bootstrap
///
/// The container comes up exactly once per process. A second
/// [`initialize`](Bootstrap::initialize) call is a configuration error, not
/// a reinitialization.
pub struct Bootstrap;

impl Bootstrap {
    /// Start the container and hand out the process-wide handle
    ///
    /// Takes ownership of the registry; after this call the controller set
    /// is sealed and only resolution remains.
    pub fn initialize(registry: ControllerRegistry) -> Result<ContainerHandle, CoreError> {
        if BOOTSTRAPPED.swap(true, Ordering::SeqCst) {
            return Err(CoreError::configuration(
                "container already initialized for this process",
            ));
        }

        registry.validate()?;
        tracing::info!(
            "Container bootstrap complete with {} registered controllers",
            registry.controller_count()
        );

        Ok(ContainerHandle::new(registry))
    }

    /// Check whether the container has been bootstrapped
    pub fn is_initialized() -> bool {
        BOOTSTRAPPED.load(Ordering::SeqCst)
    }

    /// Clear the process-wide guard
    ///
    /// Only for tests that drive multiple bootstrap cycles in one process.
    /// Such tests must be serialized.
    pub fn reset() {
        BOOTSTRAPPED.store(false, Ordering::SeqCst);
    }
}
