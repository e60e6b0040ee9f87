//! # extreg Domain
//!
//! Core types shared by every layer of the extension registry:
//!
//! - `error` - the single domain [`Error`] type and [`Result`] alias
//! - `value_objects` - descriptors for extension points, provider classes and key-classes
//! - `ports` - the traits the registry engine depends on ([`ExtensionPoint`],
//!   [`ResourceLocator`], [`ClassResolver`])
//! - `constants` - naming conventions shared by discovery and configuration
//!
//! The domain crate holds no global state and performs no I/O beyond what a
//! [`DiscoveryResource`] does when it is opened.

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port traits implemented by outer layers
pub mod ports;
/// Descriptor value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ClassResolver, DiscoveryResource, ExtensionPoint, ResourceLocator};
pub use value_objects::{
    ExtensionPointDeclaration, ExtensionPointId, KeyClass, ProviderClass, ProviderDeclaration,
    ProviderFactory, ProviderInstance, provider_instance,
};
