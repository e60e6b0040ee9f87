//! Configuration management
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from built-in defaults, an
//! optional TOML file and `EXTREG_*` environment variables, in that order.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DiscoveryConfig, LoggingConfig};
