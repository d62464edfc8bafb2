use crate::app::parameters::LaunchParameters;
use crate::app::stage::Stage;

/// Error returned from a user-supplied lifecycle hook
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// The application contract
///
/// Implement this once and register the implementation in the
/// [`ControllerRegistry`](crate::container::ControllerRegistry). The
/// lifecycle adapter resolves the single implementation at startup and
/// relays the platform's lifecycle calls to it in order: `init`, then
/// `start`, then `stop`.
///
/// `init` and `stop` default to no-ops; only `start` must be provided.
pub trait Application: Send + Sync {
    /// Called before the application is started, while no UI is showing
    ///
    /// An error here aborts startup.
    fn init(&self) -> Result<(), HookError> {
        Ok(())
    }

    /// Called when the application is started
    ///
    /// Receives the platform's UI root and the launch parameters unchanged.
    /// An error here propagates to the platform.
    fn start(&self, stage: &mut Stage, parameters: &LaunchParameters) -> Result<(), HookError>;

    /// Called when the application is stopped
    ///
    /// Errors are logged and suppressed; shutdown always completes.
    fn stop(&self) -> Result<(), HookError> {
        Ok(())
    }
}
