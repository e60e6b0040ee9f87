//! Domain Port Interfaces
//!
//! The registry engine depends only on these traits:
//!
//! - [`ExtensionPoint`] - implemented for the trait object of every
//!   extension point (`impl ExtensionPoint for dyn Codec`)
//! - [`ResourceLocator`] - finds discovery resources by name
//! - [`ClassResolver`] - maps a fully-qualified class name to its linked
//!   [`ProviderClass`](crate::ProviderClass)

/// Discovery collaborators
pub mod discovery;
/// Extension point contract
pub mod extension;

pub use discovery::{ClassResolver, DiscoveryResource, ResourceLocator};
pub use extension::ExtensionPoint;
