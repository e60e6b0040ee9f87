//! Discovery configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where discovery resources are read from
///
/// Embedded manifests come first, then each search path in order. Resources
/// later in that order win when two of them declare the same provider key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Serve manifests compiled into the binary
    pub embedded: bool,

    /// Directories holding `extensions/<extension point>` files
    pub search_paths: Vec<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            embedded: true,
            search_paths: Vec::new(),
        }
    }
}
