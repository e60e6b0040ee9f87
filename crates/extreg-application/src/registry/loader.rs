//! Process-wide registry loader
//!
//! One [`Registry`] per extension point, built on first request and kept for
//! the lifetime of the [`Loader`]. The global loader lives for the whole
//! process; tests and embedders that need isolation create their own with
//! [`Loader::new`].

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use extreg_domain::{
    ClassResolver, Error, ExtensionPoint, ExtensionPointId, ResourceLocator, Result,
};
use once_cell::sync::OnceCell;
use tracing::{debug, error};

use super::catalog::LinkedClassResolver;
use super::extension::Registry;
use super::holder::Holder;
use super::locator::EmbeddedResourceLocator;

type RegistryHolder = Holder<Arc<dyn Any + Send + Sync>>;

static GLOBAL: OnceCell<Loader> = OnceCell::new();

/// Cache of one registry per extension point
pub struct Loader {
    locator: Arc<dyn ResourceLocator>,
    resolver: Arc<dyn ClassResolver>,
    registries: DashMap<TypeId, Arc<RegistryHolder>>,
}

impl Loader {
    /// Loader discovering through `locator` and resolving through `resolver`
    pub fn new(locator: Arc<dyn ResourceLocator>, resolver: Arc<dyn ClassResolver>) -> Self {
        Self {
            locator,
            resolver,
            registries: DashMap::new(),
        }
    }

    /// Loader over embedded manifests and linked provider classes
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(EmbeddedResourceLocator::new()),
            Arc::new(LinkedClassResolver::new()),
        )
    }

    /// The process-wide loader
    ///
    /// Created with [`Loader::with_defaults`] unless one was installed first
    /// through [`Loader::install_global`].
    pub fn global() -> &'static Loader {
        GLOBAL.get_or_init(Self::with_defaults)
    }

    /// Install the process-wide loader
    ///
    /// Fails once the global loader exists, whether installed or created on
    /// first use of [`Loader::global`].
    pub fn install_global(loader: Loader) -> Result<()> {
        GLOBAL
            .set(loader)
            .map_err(|_| Error::invalid_argument("The global extension loader is already initialized"))
    }

    /// The registry of extension point `I`
    ///
    /// The first call scans the discovery resources of `I`; every later call
    /// returns the same registry. If construction fails nothing is cached
    /// and the error is returned to the caller that attempted it.
    pub fn registry<I: ?Sized + ExtensionPoint>(&self) -> Result<Arc<Registry<I>>> {
        let extension_point = Self::validate::<I>()?;

        // Clone the holder out so the map shard is not locked during the scan
        let holder = Arc::clone(
            self.registries
                .entry(extension_point.type_id())
                .or_default()
                .value(),
        );

        let registry = holder.get_or_try_init(|| {
            debug!(
                extension_point = extension_point.name(),
                "Building extension registry"
            );
            Registry::<I>::new(self.locator.as_ref(), self.resolver.as_ref())
                .map(|registry| Arc::new(registry) as Arc<dyn Any + Send + Sync>)
                .inspect_err(|e| {
                    error!(
                        extension_point = extension_point.name(),
                        error = %e,
                        "Failed to build extension registry"
                    );
                })
        })?;

        Arc::clone(registry)
            .downcast::<Registry<I>>()
            .map_err(|_| {
                Error::state(format!(
                    "{extension_point}: Cached registry has an unexpected type"
                ))
            })
    }

    /// Number of registries built so far
    pub fn len(&self) -> usize {
        self.registries
            .iter()
            .filter(|entry| entry.value().is_initialized())
            .count()
    }

    /// Whether no registry has been built yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The locator used for discovery
    pub fn locator(&self) -> &Arc<dyn ResourceLocator> {
        &self.locator
    }

    /// The resolver used for discovery
    pub fn resolver(&self) -> &Arc<dyn ClassResolver> {
        &self.resolver
    }

    fn validate<I: ?Sized + ExtensionPoint>() -> Result<ExtensionPointId> {
        let extension_point = ExtensionPointId::of::<I>();
        if extension_point.name().is_empty() {
            return Err(Error::invalid_argument(format!(
                "Extension point name of ({}) must not be empty",
                extension_point.type_name()
            )));
        }
        if !extension_point.is_trait_object() {
            return Err(Error::invalid_argument(format!(
                "({}) is not an interface: extension points must be trait objects",
                extension_point.name()
            )));
        }
        if I::declaration().is_none() {
            return Err(Error::invalid_argument(format!(
                "({}) is not an extension point, because it carries no extension point declaration",
                extension_point.name()
            )));
        }
        Ok(extension_point)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("registries", &self.len())
            .finish_non_exhaustive()
    }
}

/// The registry of extension point `I` from the process-wide loader
pub fn load<I: ?Sized + ExtensionPoint>() -> Result<Arc<Registry<I>>> {
    Loader::global().registry::<I>()
}
