//! Linked Provider Catalog
//!
//! Link-time registration of provider classes and embedded discovery
//! resources using `linkme` distributed slices.
//!
//! ### Registering a provider class
//!
//! ```ignore
//! use extreg_application::domain::{
//!     ExtensionPointId, ProviderClass, ProviderDeclaration, provider_instance,
//! };
//! use extreg_application::PROVIDER_CLASSES;
//!
//! #[linkme::distributed_slice(PROVIDER_CLASSES)]
//! static JSON_CODEC: ProviderClass = ProviderClass {
//!     name: "my_codecs::json::JsonCodec",
//!     extension_point: ExtensionPointId::of::<dyn Codec>,
//!     declaration: Some(ProviderDeclaration::new("json")),
//!     factory: || Ok(provider_instance::<dyn Codec>(Arc::new(JsonCodec::default()))),
//! };
//! ```
//!
//! ### Embedding its discovery resource
//!
//! ```ignore
//! #[linkme::distributed_slice(SERVICE_MANIFESTS)]
//! static CODEC_MANIFEST: ServiceManifest = ServiceManifest {
//!     origin: module_path!(),
//!     extension_point: ExtensionPointId::of::<dyn Codec>,
//!     contents: include_str!("../extensions/codecs"),
//! };
//! ```

use std::collections::BTreeMap;
use std::fmt;

use extreg_domain::{ClassResolver, ExtensionPointId, ProviderClass};
use tracing::warn;

/// Every provider class linked into the binary
#[linkme::distributed_slice]
pub static PROVIDER_CLASSES: [ProviderClass] = [..];

/// Discovery resource compiled into the binary
pub struct ServiceManifest {
    /// Where the manifest was declared, usually `module_path!()`
    pub origin: &'static str,
    /// Extension point the manifest lists providers for
    pub extension_point: fn() -> ExtensionPointId,
    /// Manifest text in discovery resource format
    pub contents: &'static str,
}

impl fmt::Debug for ServiceManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceManifest")
            .field("origin", &self.origin)
            .field("extension_point", &(self.extension_point)().name())
            .finish_non_exhaustive()
    }
}

/// Every discovery resource embedded in the binary
#[linkme::distributed_slice]
pub static SERVICE_MANIFESTS: [ServiceManifest] = [..];

/// Class resolver backed by linked provider classes
///
/// Indexes classes by fully-qualified name. If two linked classes share a
/// name, the first one in link order is kept.
pub struct LinkedClassResolver {
    classes: BTreeMap<&'static str, &'static ProviderClass>,
}

impl LinkedClassResolver {
    /// Resolver over every class in [`PROVIDER_CLASSES`]
    pub fn new() -> Self {
        Self::from_classes(PROVIDER_CLASSES.iter())
    }

    /// Resolver over an explicit set of classes
    pub fn from_classes<C>(classes: C) -> Self
    where
        C: IntoIterator<Item = &'static ProviderClass>,
    {
        let mut index: BTreeMap<&'static str, &'static ProviderClass> = BTreeMap::new();
        for class in classes {
            if let Some(existing) = index.get(class.name) {
                if !std::ptr::eq(*existing, class) {
                    warn!(
                        class = class.name,
                        "Duplicate provider class name, keeping the first registration"
                    );
                }
                continue;
            }
            index.insert(class.name, class);
        }
        Self { classes: index }
    }

    /// Number of indexed classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class is indexed
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for LinkedClassResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassResolver for LinkedClassResolver {
    fn resolve(&self, name: &str) -> Option<&'static ProviderClass> {
        self.classes.get(name).copied()
    }

    fn classes(&self) -> Vec<&'static ProviderClass> {
        self.classes.values().copied().collect()
    }
}

impl fmt::Debug for LinkedClassResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedClassResolver")
            .field("classes", &self.classes.keys().collect::<Vec<_>>())
            .finish()
    }
}
