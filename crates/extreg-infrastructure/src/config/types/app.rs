//! Main application configuration

use serde::{Deserialize, Serialize};

use super::discovery::DiscoveryConfig;
use super::logging::LoggingConfig;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Discovery resource sources
    pub discovery: DiscoveryConfig,
}
