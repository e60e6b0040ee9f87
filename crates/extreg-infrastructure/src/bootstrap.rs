//! Loader bootstrap
//!
//! Turns the discovery section of [`AppConfig`] into the locator chain used
//! by a [`Loader`]: embedded manifests first, then each search path.

use std::sync::Arc;

use extreg_application::{ChainedResourceLocator, EmbeddedResourceLocator, LinkedClassResolver, Loader};
use extreg_domain::error::Result;
use tracing::info;

use crate::config::{AppConfig, DiscoveryConfig};
use crate::discovery::DirectoryResourceLocator;
use crate::logging::log_discovery_source;

/// Locator chain described by `config`
pub fn build_locator(config: &DiscoveryConfig) -> ChainedResourceLocator {
    let mut locator = ChainedResourceLocator::new();

    if config.embedded {
        log_discovery_source("embedded", "linked manifests");
        locator = locator.with(Arc::new(EmbeddedResourceLocator::new()));
    }

    if !config.search_paths.is_empty() {
        for path in &config.search_paths {
            log_discovery_source("directory", &path.display().to_string());
        }
        locator = locator.with(Arc::new(DirectoryResourceLocator::new(
            config.search_paths.iter().cloned(),
        )));
    }

    locator
}

/// Loader over the configured discovery sources and every linked class
pub fn build_loader(config: &AppConfig) -> Loader {
    Loader::new(
        Arc::new(build_locator(&config.discovery)),
        Arc::new(LinkedClassResolver::new()),
    )
}

/// Build the loader described by `config` and install it process-wide
///
/// Must run before anything touches [`Loader::global`].
pub fn install_global_loader(config: &AppConfig) -> Result<&'static Loader> {
    Loader::install_global(build_loader(config))?;
    info!(
        embedded = config.discovery.embedded,
        search_paths = config.discovery.search_paths.len(),
        "Global extension loader installed"
    );
    Ok(Loader::global())
}
