pub mod bootstrap;
pub mod descriptor;
pub mod handle;
pub mod registry;
pub mod resolver;

pub use bootstrap::Bootstrap;
pub use descriptor::ControllerType;
pub use handle::ContainerHandle;
pub use registry::{ControllerEntry, ControllerRegistry};
pub use resolver::ControllerResolver;
