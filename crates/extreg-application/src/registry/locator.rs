//! Built-in resource locators

use std::fmt;
use std::sync::Arc;

use extreg_domain::constants::discovery_resource_name;
use extreg_domain::{DiscoveryResource, ExtensionPoint, ResourceLocator, Result};

use super::catalog::{SERVICE_MANIFESTS, ServiceManifest};

/// Locator serving manifests compiled into the binary
///
/// Manifests are served ordered by origin so that merge order does not
/// depend on link order.
pub struct EmbeddedResourceLocator {
    manifests: Vec<&'static ServiceManifest>,
}

impl EmbeddedResourceLocator {
    /// Locator over every manifest in [`SERVICE_MANIFESTS`]
    pub fn new() -> Self {
        Self::from_manifests(SERVICE_MANIFESTS.iter())
    }

    /// Locator over an explicit set of manifests
    pub fn from_manifests<M>(manifests: M) -> Self
    where
        M: IntoIterator<Item = &'static ServiceManifest>,
    {
        let mut manifests: Vec<_> = manifests.into_iter().collect();
        manifests.sort_by_key(|manifest| manifest.origin);
        Self { manifests }
    }
}

impl Default for EmbeddedResourceLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLocator for EmbeddedResourceLocator {
    fn locate(&self, name: &str) -> Result<Vec<DiscoveryResource>> {
        Ok(self
            .manifests
            .iter()
            .filter(|manifest| {
                discovery_resource_name((manifest.extension_point)().name()) == name
            })
            .map(|manifest| DiscoveryResource::from_static(manifest.origin, manifest.contents))
            .collect())
    }
}

impl fmt::Debug for EmbeddedResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedResourceLocator")
            .field("manifests", &self.manifests)
            .finish()
    }
}

/// Locator over resources held in memory
///
/// Resources are served in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceLocator {
    resources: Vec<(String, String, String)>,
}

impl MemoryResourceLocator {
    /// An empty locator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under an explicit resource name
    pub fn with_resource(
        mut self,
        name: impl Into<String>,
        origin: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        self.resources
            .push((name.into(), origin.into(), contents.into()));
        self
    }

    /// Add a discovery resource for the extension point `I`
    pub fn with_manifest<I: ?Sized + ExtensionPoint>(
        self,
        origin: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        self.with_resource(discovery_resource_name(I::name()), origin, contents)
    }
}

impl ResourceLocator for MemoryResourceLocator {
    fn locate(&self, name: &str) -> Result<Vec<DiscoveryResource>> {
        Ok(self
            .resources
            .iter()
            .filter(|(resource_name, _, _)| resource_name == name)
            .map(|(_, origin, contents)| DiscoveryResource::from_string(origin, contents.clone()))
            .collect())
    }
}

/// Locator concatenating the results of several locators, in order
#[derive(Clone, Default)]
pub struct ChainedResourceLocator {
    locators: Vec<Arc<dyn ResourceLocator>>,
}

impl ChainedResourceLocator {
    /// An empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a locator to the chain
    pub fn with(mut self, locator: Arc<dyn ResourceLocator>) -> Self {
        self.locators.push(locator);
        self
    }

    /// Number of chained locators
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

impl ResourceLocator for ChainedResourceLocator {
    fn locate(&self, name: &str) -> Result<Vec<DiscoveryResource>> {
        let mut resources = Vec::new();
        for locator in &self.locators {
            resources.extend(locator.locate(name)?);
        }
        Ok(resources)
    }
}

impl fmt::Debug for ChainedResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedResourceLocator")
            .field("locators", &self.locators.len())
            .finish()
    }
}
