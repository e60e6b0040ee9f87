//! Domain Value Objects
//!
//! Immutable descriptors the registry works with. Most of them are built in
//! `static` items at link time, so their constructors are `const fn`.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ExtensionPointId`] | Runtime identity of an extension point trait object |
//! | [`ExtensionPointDeclaration`] | Metadata every extension point must carry |
//! | [`KeyClass`] | Marker type used for lookups by type instead of by key |
//! | [`ProviderDeclaration`] | Key and optional key-class attached to a provider |
//! | [`ProviderClass`] | Linked descriptor of one concrete provider |

/// Extension point identity and declaration
pub mod extension_point;
/// Key-class marker descriptors
pub mod key_class;
/// Provider class descriptors
pub mod provider;

pub use extension_point::{ExtensionPointDeclaration, ExtensionPointId};
pub use key_class::KeyClass;
pub use provider::{
    ProviderClass, ProviderDeclaration, ProviderFactory, ProviderInstance, provider_instance,
};
