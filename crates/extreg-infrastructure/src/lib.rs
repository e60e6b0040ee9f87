//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the registry engine.
//!
//! ## Module Categories
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration from defaults, TOML and environment |
//! | [`bootstrap`] | Builds and installs the process-wide loader |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Discovery
//! | Module | Description |
//! |--------|-------------|
//! | [`discovery`] | Discovery resources read from search directories |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers mapping foreign errors into the domain error |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_loader, build_locator, install_global_loader};
pub use config::{AppConfig, ConfigLoader, DiscoveryConfig, LoggingConfig};
pub use discovery::DirectoryResourceLocator;
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
