//! Declaration macros
//!
//! Shorthands for the declarations provider crates write most often.
//! Names and origins are derived from `module_path!()`, so discovery
//! resources must list the same paths.

/// Declare a trait as an extension point
///
/// Implements [`ExtensionPoint`](crate::domain::ExtensionPoint) for
/// `dyn Trait` with the name `module_path!()::Trait`.
///
/// ```ignore
/// pub trait Codec: Send + Sync {
///     fn encode(&self, input: &str) -> String;
/// }
///
/// extension_point!(Codec, default = "json");
/// ```
#[macro_export]
macro_rules! extension_point {
    ($trait:ident, default = $default:expr $(,)?) => {
        impl $crate::domain::ExtensionPoint for dyn $trait {
            fn name() -> &'static str {
                concat!(module_path!(), "::", stringify!($trait))
            }

            fn declaration() -> ::std::option::Option<$crate::domain::ExtensionPointDeclaration> {
                ::std::option::Option::Some($crate::domain::ExtensionPointDeclaration::new(
                    $default,
                ))
            }
        }
    };
    ($trait:ident $(,)?) => {
        impl $crate::domain::ExtensionPoint for dyn $trait {
            fn name() -> &'static str {
                concat!(module_path!(), "::", stringify!($trait))
            }

            fn declaration() -> ::std::option::Option<$crate::domain::ExtensionPointDeclaration> {
                ::std::option::Option::Some(
                    $crate::domain::ExtensionPointDeclaration::without_default(),
                )
            }
        }
    };
}

/// Register a provider class in [`PROVIDER_CLASSES`](crate::PROVIDER_CLASSES)
///
/// The provider type must implement `Default`, which serves as its
/// zero-argument constructor. Its class name is `module_path!()::Type`.
///
/// ```ignore
/// #[derive(Default)]
/// struct JsonCodec;
///
/// provider_class!(JSON_CODEC: JsonCodec as dyn Codec, key = "json");
/// provider_class!(YAML_CODEC: YamlCodec as dyn Codec, key = "yaml", key_class = &YAML_KEY);
/// provider_class!(RAW_CODEC: RawCodec as dyn Codec); // key "RawCodec"
/// ```
#[macro_export]
macro_rules! provider_class {
    (@declaration) => {
        ::std::option::Option::None
    };
    (@declaration $key:expr) => {
        ::std::option::Option::Some($crate::domain::ProviderDeclaration::new($key))
    };
    (@declaration $key:expr, $key_class:expr) => {
        ::std::option::Option::Some(
            $crate::domain::ProviderDeclaration::new($key).with_key_class($key_class),
        )
    };
    (
        $static:ident: $provider:ident as dyn $extension_point:path
        $(, key = $key:expr $(, key_class = $key_class:expr)?)? $(,)?
    ) => {
        #[$crate::linkme::distributed_slice($crate::PROVIDER_CLASSES)]
        #[linkme(crate = $crate::linkme)]
        static $static: $crate::domain::ProviderClass = $crate::domain::ProviderClass {
            name: concat!(module_path!(), "::", stringify!($provider)),
            extension_point: $crate::domain::ExtensionPointId::of::<dyn $extension_point>,
            declaration: $crate::provider_class!(@declaration $($key $(, $key_class)?)?),
            factory: || {
                ::std::result::Result::Ok($crate::domain::provider_instance::<dyn $extension_point>(
                    ::std::sync::Arc::new(<$provider as ::std::default::Default>::default()),
                ))
            },
        };
    };
}

/// Embed a discovery resource in [`SERVICE_MANIFESTS`](crate::SERVICE_MANIFESTS)
///
/// The manifest's origin is `module_path!()`.
///
/// ```ignore
/// service_manifest!(CODEC_MANIFEST: dyn Codec, include_str!("../extensions/codecs"));
/// ```
#[macro_export]
macro_rules! service_manifest {
    ($static:ident: dyn $extension_point:path, $contents:expr $(,)?) => {
        #[$crate::linkme::distributed_slice($crate::SERVICE_MANIFESTS)]
        #[linkme(crate = $crate::linkme)]
        static $static: $crate::ServiceManifest = $crate::ServiceManifest {
            origin: module_path!(),
            extension_point: $crate::domain::ExtensionPointId::of::<dyn $extension_point>,
            contents: $contents,
        };
    };
}
