//! Domain layer constants
//!
//! Naming conventions shared by discovery, the loader and the tooling that
//! produces discovery resources.

// ============================================================================
// DISCOVERY CONSTANTS
// ============================================================================

/// Prefix of every discovery resource name
///
/// The full name is this prefix followed by the extension point's
/// fully-qualified name, e.g. `extensions/my_app::codec::Codec`.
pub const DISCOVERY_RESOURCE_PREFIX: &str = "extensions/";

/// Character that starts a comment in a discovery resource
pub const DISCOVERY_COMMENT_CHAR: char = '#';

/// Separator between segments of a fully-qualified name
pub const PATH_SEPARATOR: &str = "::";

/// Build the discovery resource name for an extension point
pub fn discovery_resource_name(extension_point: &str) -> String {
    format!("{DISCOVERY_RESOURCE_PREFIX}{extension_point}")
}

/// Last segment of a fully-qualified name
///
/// Used as the provider key when a provider class declares none.
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit(PATH_SEPARATOR)
        .next()
        .unwrap_or(qualified_name)
}
