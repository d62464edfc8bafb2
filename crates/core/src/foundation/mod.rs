pub mod lifecycle;

pub use lifecycle::LifecycleState;
