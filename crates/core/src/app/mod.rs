pub mod application;
pub mod lifecycle;
pub mod parameters;
pub mod stage;

pub use application::{Application, HookError};
pub use lifecycle::ApplicationLifecycle;
pub use parameters::LaunchParameters;
pub use stage::Stage;
