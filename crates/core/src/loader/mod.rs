pub mod engine;
pub mod factory;
pub mod view_loader;

pub use engine::{LoaderContext, ViewEngine, ViewNode, ViewTree};
pub use factory::ViewLoaderFactory;
pub use view_loader::{Charset, ControllerFactory, ViewLoader};
