use crate::app::application::Application;
use crate::app::parameters::LaunchParameters;
use crate::app::stage::Stage;
use crate::container::bootstrap::Bootstrap;
use crate::container::handle::ContainerHandle;
use crate::container::registry::ControllerRegistry;
use crate::errors::CoreError;
use crate::foundation::lifecycle::LifecycleState;
use std::sync::Arc;

const COMPONENT: &str = "application lifecycle";

/// Relays platform lifecycle calls to the registered application
///
/// The platform drives this adapter as its own init/start/stop. On init the
/// container is bootstrapped and the single registered [`Application`]
/// implementation is resolved; zero or multiple registrations abort startup
/// before any UI shows. Stop failures are logged and suppressed so shutdown
/// always completes.
pub struct ApplicationLifecycle {
    registry: Option<ControllerRegistry>,
    container: Option<ContainerHandle>,
    application: Option<Arc<dyn Application>>,
    state: LifecycleState,
}

impl ApplicationLifecycle {
    /// Create an adapter around a configured registry
    ///
    /// The registry is consumed by [`on_platform_init`](Self::on_platform_init);
    /// registration is closed once the platform starts driving the adapter.
    pub fn new(registry: ControllerRegistry) -> Self {
        Self {
            registry: Some(registry),
            container: None,
            application: None,
            state: LifecycleState::NotStarted,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The container handle, available after init
    pub fn container(&self) -> Option<&ContainerHandle> {
        self.container.as_ref()
    }

    fn transition(&mut self, next: LifecycleState, operation: &str) -> Result<(), CoreError> {
        if !self.state.can_transition_to(next) {
            return Err(CoreError::lifecycle_error(
                COMPONENT,
                operation,
                format!("illegal transition from '{}' to '{}'", self.state, next),
            ));
        }
        self.state = next;
        Ok(())
    }

    /// Platform init: bootstrap the container, resolve and init the application
    ///
    /// Fails with a configuration error unless exactly one [`Application`]
    /// implementation is registered. A failing `init` hook propagates and
    /// aborts startup; the adapter is then left in `Initializing`, from which
    /// only shutdown is reachable.
    pub fn on_platform_init(&mut self) -> Result<(), CoreError> {
        self.transition(LifecycleState::Initializing, "init")?;

        let registry = self.registry.take().ok_or_else(|| {
            CoreError::configuration("lifecycle adapter has no registry to bootstrap")
        })?;
        let container = Bootstrap::initialize(registry)?;

        let mut bindings = container.application_bindings()?;
        let application = match bindings.len() {
            1 => bindings.remove(0),
            0 => {
                return Err(CoreError::configuration(
                    "no application implementation registered in the container",
                ))
            }
            n => {
                return Err(CoreError::configuration(format!(
                    "expected exactly one application implementation, found {}",
                    n
                )))
            }
        };

        self.container = Some(container);

        tracing::info!("Initializing application.");
        application
            .init()
            .map_err(|source| CoreError::lifecycle_error("application", "init", source))?;

        self.application = Some(application);
        self.transition(LifecycleState::Initialized, "init")
    }

    /// Platform start: forward the UI root and launch parameters to `start`
    pub fn on_platform_start(
        &mut self,
        stage: &mut Stage,
        parameters: &LaunchParameters,
    ) -> Result<(), CoreError> {
        if self.state != LifecycleState::Initialized {
            return Err(CoreError::lifecycle_error(
                COMPONENT,
                "start",
                format!("start requested while '{}'", self.state),
            ));
        }

        let application = self.application.as_ref().ok_or_else(|| {
            CoreError::configuration("no application resolved before start")
        })?;

        tracing::info!("Starting application.");
        application
            .start(stage, parameters)
            .map_err(|source| CoreError::lifecycle_error("application", "start", source))?;

        self.transition(LifecycleState::Running, "start")
    }

    /// Platform stop: forward to `stop`, suppressing hook failures
    ///
    /// Legal from `Initializing`, `Initialized` and `Running`, since the
    /// platform may stop the application before startup finishes. If the
    /// application was never resolved there is nothing to relay and the
    /// adapter simply transitions to `Stopped`.
    pub fn on_platform_stop(&mut self) -> Result<(), CoreError> {
        self.transition(LifecycleState::Stopped, "stop")?;

        if let Some(application) = &self.application {
            tracing::info!("Stopping application.");
            if let Err(source) = application.stop() {
                tracing::error!("Application stop hook failed: {}", source);
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for ApplicationLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationLifecycle")
            .field("state", &self.state)
            .field("has_container", &self.container.is_some())
            .field("has_application", &self.application.is_some())
            .finish()
    }
}
