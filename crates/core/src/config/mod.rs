pub mod sources;

pub use sources::{AppConfig, ConfigSource};
