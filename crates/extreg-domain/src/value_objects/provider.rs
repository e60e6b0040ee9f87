//! Provider class descriptors

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::constants::simple_name;
use crate::error::BoxError;

use super::{ExtensionPointId, KeyClass};

/// Type-erased provider instance produced by a factory
///
/// Always holds an `Arc<I>` for the extension point `I` the provider class
/// implements; see [`provider_instance`].
pub type ProviderInstance = Box<dyn Any + Send + Sync>;

/// Zero-argument provider constructor
pub type ProviderFactory = fn() -> Result<ProviderInstance, BoxError>;

/// Erase a provider instance for return from a [`ProviderFactory`]
pub fn provider_instance<I>(provider: Arc<I>) -> ProviderInstance
where
    I: ?Sized + Send + Sync + 'static,
{
    Box::new(provider)
}

/// Key metadata a provider class declares about itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDeclaration {
    key: &'static str,
    key_class: Option<&'static KeyClass>,
}

impl ProviderDeclaration {
    /// Declare the provider key
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            key_class: None,
        }
    }

    /// Also make the provider reachable through a key-class lookup
    pub const fn with_key_class(self, key_class: &'static KeyClass) -> Self {
        Self {
            key: self.key,
            key_class: Some(key_class),
        }
    }

    /// Declared key
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Declared key-class, if any
    pub fn key_class(&self) -> Option<&'static KeyClass> {
        self.key_class
    }
}

/// Linked descriptor of one concrete provider
///
/// Provider crates register these with
/// `#[linkme::distributed_slice(PROVIDER_CLASSES)]`. The `name` is what
/// discovery resources list; the `extension_point` is checked against the
/// extension point being loaded before the class is accepted.
pub struct ProviderClass {
    /// Fully-qualified class name (e.g., `my_codecs::json::JsonCodec`)
    pub name: &'static str,
    /// Extension point the provider implements
    pub extension_point: fn() -> ExtensionPointId,
    /// Declared key metadata; without it the key is the simple class name
    pub declaration: Option<ProviderDeclaration>,
    /// Zero-argument constructor
    pub factory: ProviderFactory,
}

impl ProviderClass {
    /// Last segment of the class name
    pub fn simple_name(&self) -> &'static str {
        simple_name(self.name)
    }

    /// Effective provider key
    pub fn key(&self) -> &'static str {
        self.declaration
            .map_or_else(|| self.simple_name(), |declaration| declaration.key())
    }

    /// Declared key-class, if any
    pub fn key_class(&self) -> Option<&'static KeyClass> {
        self.declaration.and_then(|declaration| declaration.key_class())
    }

    /// Identity of the implemented extension point
    pub fn extension_point(&self) -> ExtensionPointId {
        (self.extension_point)()
    }

    /// Run the provider's constructor
    pub fn instantiate(&self) -> Result<ProviderInstance, BoxError> {
        (self.factory)()
    }
}

impl fmt::Debug for ProviderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClass")
            .field("name", &self.name)
            .field("extension_point", &self.extension_point().name())
            .field("declaration", &self.declaration)
            .finish_non_exhaustive()
    }
}
