//! Per-extension-point registry

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use extreg_domain::{
    ClassResolver, Error, ExtensionPoint, ExtensionPointId, KeyClass, ProviderClass,
    ResourceLocator, Result,
};
use tracing::{debug, info, warn};

use super::discovery::Discovery;
use super::holder::Holder;
use super::index::KeyIndex;

/// Providers of one extension point, indexed by key
///
/// Built once from the discovery resources of `I`. After construction the
/// key index and the key-class table never change; provider instances are
/// created on first lookup of their key and cached for the registry's
/// lifetime.
///
/// Lookups for different keys never wait on each other. Concurrent first
/// lookups of the same key run the provider's constructor exactly once.
pub struct Registry<I: ?Sized + ExtensionPoint> {
    extension_point: ExtensionPointId,
    default_key: Option<&'static str>,
    index: KeyIndex,
    instances: DashMap<&'static str, Arc<Holder<Arc<I>>>>,
}

impl<I: ?Sized + ExtensionPoint> Registry<I> {
    /// Scan the discovery resources of `I` and build its key index
    ///
    /// Any malformed resource line, unknown class or class implementing a
    /// different extension point fails the whole construction.
    pub fn new(locator: &dyn ResourceLocator, resolver: &dyn ClassResolver) -> Result<Self> {
        let extension_point = ExtensionPointId::of::<I>();
        let default_key = I::declaration().and_then(|declaration| declaration.default_key());

        let discovered = Discovery::new(extension_point.name(), locator, resolver)
            .scan(|class| class.extension_point() == extension_point)?;
        let index = KeyIndex::build(extension_point.name(), &discovered);

        info!(
            extension_point = extension_point.name(),
            providers = index.len(),
            key_classes = index.key_classes().len(),
            default_key = default_key.unwrap_or(""),
            "Extension registry built"
        );

        Ok(Self {
            extension_point,
            default_key,
            index,
            instances: DashMap::new(),
        })
    }

    /// Provider for `key`, or for the default key when `key` is absent or empty
    pub fn provider(&self, key: Option<&str>) -> Result<Arc<I>> {
        let key = self.effective_key(key)?;

        if let Some(holder) = self.instances.get(key) {
            if let Some(provider) = holder.get() {
                return Ok(Arc::clone(provider));
            }
        }

        let (key, class) = self.index.get_key_value(key).ok_or_else(|| {
            Error::configuration(format!(
                "{}: Can not find provider class keyed by {key}",
                self.extension_point
            ))
        })?;

        // Clone the holder out so the map shard is not locked during construction
        let holder = Arc::clone(self.instances.entry(key).or_default().value());
        holder
            .get_or_try_init(|| self.instantiate(key, class))
            .map(Arc::clone)
    }

    /// Provider for the default key
    pub fn provider_or_default(&self) -> Result<Arc<I>> {
        self.provider(None)
    }

    /// Provider registered for the first key-class assignable from `key_class`
    ///
    /// Key-classes are tried in the order they were registered during
    /// discovery; the first compatible one wins even if a more specific one
    /// was registered later. Without a match the default key is used.
    pub fn provider_by_key_class(&self, key_class: &KeyClass) -> Result<Arc<I>> {
        self.provider(self.key_for_class(key_class))
    }

    /// Like [`provider`](Self::provider), but any lookup error yields `None`
    pub fn optional_provider(&self, key: Option<&str>) -> Option<Arc<I>> {
        self.provider(key)
            .inspect_err(|e| self.log_optional_miss(e))
            .ok()
    }

    /// Like [`provider_by_key_class`](Self::provider_by_key_class), but any
    /// lookup error yields `None`
    pub fn optional_provider_by_key_class(&self, key_class: &KeyClass) -> Option<Arc<I>> {
        self.provider_by_key_class(key_class)
            .inspect_err(|e| self.log_optional_miss(e))
            .ok()
    }

    /// Key registered for the first key-class assignable from `key_class`
    pub fn key_for_class(&self, key_class: &KeyClass) -> Option<&'static str> {
        self.index.key_for_class(key_class)
    }

    /// Identity of the extension point
    pub fn extension_point(&self) -> ExtensionPointId {
        self.extension_point
    }

    /// Declared default key
    pub fn default_key(&self) -> Option<&'static str> {
        self.default_key
    }

    /// All provider keys, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        self.index.keys()
    }

    /// Whether a provider is registered under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Provider class registered under `key`
    pub fn provider_class(&self, key: &str) -> Option<&'static ProviderClass> {
        self.index.get(key)
    }

    /// Registered key-classes and their keys, in registration order
    pub fn key_classes(&self) -> &[(&'static KeyClass, &'static str)] {
        self.index.key_classes()
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no provider is registered
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn effective_key<'k>(&self, key: Option<&'k str>) -> Result<&'k str> {
        match (key.filter(|key| !key.is_empty()), self.default_key) {
            (Some(key), _) => Ok(key),
            (None, Some(default_key)) => Ok(default_key),
            (None, None) => Err(Error::invalid_argument(format!(
                "{}: Provider key and default provider key are both empty",
                self.extension_point
            ))),
        }
    }

    fn instantiate(&self, key: &str, class: &ProviderClass) -> Result<Arc<I>> {
        debug!(
            extension_point = self.extension_point.name(),
            key,
            class = class.name,
            "Instantiating provider"
        );

        let instance = class.instantiate().map_err(|cause| {
            let message = format!(
                "Provider instance (key: {key}, extension point: {}) couldn't be instantiated: {cause}",
                self.extension_point
            );
            Error::state_with_source(message, cause)
        })?;

        instance
            .downcast::<Arc<I>>()
            .map(|provider| *provider)
            .map_err(|_| {
                Error::state(format!(
                    "Provider instance (key: {key}, extension point: {}) couldn't be instantiated: \
                     factory of {} returned a value of another type",
                    self.extension_point, class.name
                ))
            })
    }

    fn log_optional_miss(&self, error: &Error) {
        warn!(
            extension_point = self.extension_point.name(),
            error = %error,
            "Error happened while getting provider, returning none"
        );
    }
}

impl<I: ?Sized + ExtensionPoint> fmt::Debug for Registry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("extension_point", &self.extension_point.name())
            .field("default_key", &self.default_key)
            .field("keys", &self.keys())
            .field(
                "key_classes",
                &self
                    .key_classes()
                    .iter()
                    .map(|(key_class, key)| (key_class.name(), *key))
                    .collect::<Vec<_>>(),
            )
            .field("instances", &self.instances.len())
            .finish()
    }
}
