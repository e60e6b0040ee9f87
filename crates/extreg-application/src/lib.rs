//! # extreg Application
//!
//! The extension registry engine.
//!
//! Provider crates register [`ProviderClass`](domain::ProviderClass)
//! descriptors in the [`PROVIDER_CLASSES`] distributed slice and ship
//! discovery resources listing them. Callers ask the [`Loader`] for the
//! [`Registry`] of an extension point and look providers up by key or by
//! key-class:
//!
//! ```ignore
//! use extreg_application::{extension_point, load, provider_class};
//!
//! pub trait Codec: Send + Sync {
//!     fn encode(&self, input: &str) -> String;
//! }
//! extension_point!(Codec, default = "json");
//!
//! #[derive(Default)]
//! struct JsonCodec;
//! impl Codec for JsonCodec { /* ... */ }
//! provider_class!(JSON_CODEC: JsonCodec as dyn Codec, key = "json");
//!
//! let codecs = load::<dyn Codec>()?;
//! let json = codecs.provider_or_default()?;
//! ```

/// Domain layer re-export
pub use extreg_domain as domain;

/// Re-export used by the registration macros
pub use linkme;

mod macros;
pub mod registry;

pub use registry::{
    ChainedResourceLocator, DiscoveredClass, Discovery, EmbeddedResourceLocator, Holder,
    KeyIndex, LinkedClassResolver, Loader, MemoryResourceLocator, PROVIDER_CLASSES, Registry,
    SERVICE_MANIFESTS, ServiceManifest, load,
};
