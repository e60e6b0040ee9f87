//! Extension point contract

use crate::value_objects::ExtensionPointDeclaration;

/// An abstract service interface that providers can be discovered for
///
/// Implement it for the trait object type of the service trait, usually
/// through the `extension_point!` macro of the application crate:
///
/// ```
/// use extreg_domain::{ExtensionPoint, ExtensionPointDeclaration};
///
/// pub trait Codec: Send + Sync {
///     fn encode(&self, input: &str) -> String;
/// }
///
/// impl ExtensionPoint for dyn Codec {
///     fn name() -> &'static str {
///         "my_app::Codec"
///     }
///
///     fn declaration() -> Option<ExtensionPointDeclaration> {
///         Some(ExtensionPointDeclaration::new("json"))
///     }
/// }
/// ```
///
/// The loader rejects extension points that are not trait objects, that
/// have an empty name, or that return no declaration.
pub trait ExtensionPoint: Send + Sync + 'static {
    /// Fully-qualified name; discovery resources are named after it
    fn name() -> &'static str;

    /// Declaration metadata carrying the default provider key
    fn declaration() -> Option<ExtensionPointDeclaration>;
}
