//! # extreg
//!
//! Process-wide registry of extension points and their keyed providers.
//!
//! An extension point is a trait declared with [`extension_point!`]. Provider
//! types register with [`provider_class!`] and are listed, by fully-qualified
//! name, in discovery resources named `extensions/<extension point>`. The
//! first [`load`] of an extension point scans those resources once; every
//! provider is then created on first lookup and shared afterwards.
//!
//! ```ignore
//! use extreg::{extension_point, load, provider_class};
//!
//! pub trait Codec: Send + Sync {
//!     fn encode(&self, input: &str) -> String;
//! }
//! extension_point!(Codec, default = "json");
//!
//! #[derive(Default)]
//! struct JsonCodec;
//! impl Codec for JsonCodec {
//!     fn encode(&self, input: &str) -> String {
//!         format!("{input:?}")
//!     }
//! }
//! provider_class!(JSON_CODEC: JsonCodec as dyn Codec, key = "json");
//!
//! let codec = load::<dyn Codec>()?.provider_or_default()?;
//! ```
//!
//! ## Crates
//!
//! | Crate | Description |
//! |-------|-------------|
//! | `extreg-domain` | Error type, descriptors and ports |
//! | `extreg-application` | Discovery, key index, registry and loader |
//! | `extreg-infrastructure` | Configuration, logging and filesystem discovery |

pub mod cli;

pub use extreg_application::{
    ChainedResourceLocator, EmbeddedResourceLocator, KeyIndex, LinkedClassResolver, Loader,
    MemoryResourceLocator, PROVIDER_CLASSES, Registry, SERVICE_MANIFESTS, ServiceManifest,
    extension_point, linkme, load, provider_class, service_manifest,
};
pub use extreg_domain as domain;
pub use extreg_domain::{Error, Result};
pub use extreg_infrastructure as infrastructure;
