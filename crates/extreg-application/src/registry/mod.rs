//! Extension Registry System
//!
//! Discovers provider classes for an extension point, indexes them by key
//! and hands out one lazily created instance per key.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        Provider Lookup Flow                      │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  1. Provider defines:  #[linkme::distributed_slice(              │
//! │                            PROVIDER_CLASSES)]                    │
//! │                        static ENTRY: ProviderClass = ...         │
//! │                              ↓                                   │
//! │  2. Resource lists:    extensions/<extension point name>         │
//! │                        my_codecs::json::JsonCodec                │
//! │                              ↓                                   │
//! │  3. Loader builds:     Registry<dyn Codec> (once per process)    │
//! │                              ↓                                   │
//! │  4. Caller asks:       registry.provider(Some("json"))           │
//! │                        → Holder per key → Arc<dyn Codec>         │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod discovery;
pub mod extension;
pub mod holder;
pub mod index;
pub mod loader;
pub mod locator;

pub use catalog::{
    LinkedClassResolver, PROVIDER_CLASSES, SERVICE_MANIFESTS, ServiceManifest,
};
pub use discovery::{DiscoveredClass, Discovery, ManifestSyntaxError, parse_line};
pub use extension::Registry;
pub use holder::Holder;
pub use index::KeyIndex;
pub use loader::{Loader, load};
pub use locator::{ChainedResourceLocator, EmbeddedResourceLocator, MemoryResourceLocator};
