//! Provider discovery
//!
//! Reads the discovery resources of one extension point and resolves every
//! class name they list.
//!
//! ## Resource format
//!
//! ```text
//! # Codecs shipped with my_codecs
//! my_codecs::json::JsonCodec
//! my_codecs::yaml::YamlCodec   # trailing comments are fine
//! ```
//!
//! One fully-qualified class name per line. `#` starts a comment running to
//! the end of the line, surrounding whitespace is ignored and blank lines are
//! skipped. Anything else fails the whole scan.

use std::io::{self, BufRead};

use extreg_domain::constants::{DISCOVERY_COMMENT_CHAR, PATH_SEPARATOR, discovery_resource_name};
use extreg_domain::{ClassResolver, DiscoveryResource, Error, ProviderClass, ResourceLocator, Result};
use thiserror::Error;
use tracing::debug;

/// Malformed discovery resource line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestSyntaxError {
    /// The line contains whitespace inside the class name
    #[error("Illegal configuration-file syntax: {0}")]
    IllegalSyntax(String),

    /// The line is not a fully-qualified identifier path
    #[error("Illegal provider class name: {0}")]
    IllegalClassName(String),
}

/// Parse one discovery resource line
///
/// Returns `Ok(None)` for lines that are blank once comments and
/// surrounding whitespace are removed.
pub fn parse_line(line: &str) -> std::result::Result<Option<&str>, ManifestSyntaxError> {
    let line = match line.find(DISCOVERY_COMMENT_CHAR) {
        Some(comment) => &line[..comment],
        None => line,
    }
    .trim();

    if line.is_empty() {
        return Ok(None);
    }
    if line.contains([' ', '\t']) {
        return Err(ManifestSyntaxError::IllegalSyntax(line.to_string()));
    }
    if !line.split(PATH_SEPARATOR).all(is_identifier) {
        return Err(ManifestSyntaxError::IllegalClassName(line.to_string()));
    }
    Ok(Some(line))
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// A provider class found in a discovery resource
#[derive(Debug, Clone)]
pub struct DiscoveredClass {
    /// Origin of the resource that listed the class
    pub origin: String,
    /// 1-based line number within that resource
    pub line: usize,
    /// The resolved class
    pub class: &'static ProviderClass,
}

/// One discovery pass over the resources of an extension point
pub struct Discovery<'a> {
    extension_point: &'a str,
    locator: &'a dyn ResourceLocator,
    resolver: &'a dyn ClassResolver,
}

impl<'a> Discovery<'a> {
    /// Prepare a scan for the named extension point
    pub fn new(
        extension_point: &'a str,
        locator: &'a dyn ResourceLocator,
        resolver: &'a dyn ClassResolver,
    ) -> Self {
        Self {
            extension_point,
            locator,
            resolver,
        }
    }

    /// Name of the discovery resources this scan reads
    pub fn resource_name(&self) -> String {
        discovery_resource_name(self.extension_point)
    }

    /// Every resource the locator knows under this extension point's name
    pub fn resources(&self) -> Result<Vec<DiscoveryResource>> {
        Self::locate(self.extension_point, self.locator)
    }

    /// The discovery resources of an extension point, without resolving them
    pub fn locate(
        extension_point: &str,
        locator: &dyn ResourceLocator,
    ) -> Result<Vec<DiscoveryResource>> {
        locator
            .locate(&discovery_resource_name(extension_point))
            .map_err(|e| {
                Error::configuration_with_source(
                    format!("{extension_point}: Error locating discovery resources: {e}"),
                    e,
                )
            })
    }

    /// Read every resource and resolve every listed class
    ///
    /// `implements` decides whether a resolved class belongs to the
    /// extension point. Classes are returned in resource order, then line
    /// order. Any malformed line, unknown class or foreign class aborts the
    /// scan with a configuration error naming the resource and line.
    pub fn scan<F>(&self, implements: F) -> Result<Vec<DiscoveredClass>>
    where
        F: Fn(&ProviderClass) -> bool,
    {
        let resources = self.resources()?;
        debug!(
            extension_point = self.extension_point,
            resources = resources.len(),
            "Scanning discovery resources"
        );

        let mut discovered = Vec::new();
        for resource in &resources {
            self.scan_resource(resource, &implements, &mut discovered)?;
        }
        Ok(discovered)
    }

    fn scan_resource<F>(
        &self,
        resource: &DiscoveryResource,
        implements: &F,
        discovered: &mut Vec<DiscoveredClass>,
    ) -> Result<()>
    where
        F: Fn(&ProviderClass) -> bool,
    {
        let origin = resource.origin();
        let reader = resource.open().map_err(|e| {
            self.fail_with(format!("{origin}: Error opening discovery resource"), e)
        })?;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e: io::Error| {
                self.fail_with(format!("{origin}: Error reading discovery resource"), e)
            })?;
            let line_no = index + 1;

            let class_name = match parse_line(&line) {
                Ok(Some(class_name)) => class_name,
                Ok(None) => continue,
                Err(e) => return Err(self.fail(format!("{origin}:{line_no}: {e}"))),
            };

            let class = self.resolver.resolve(class_name).ok_or_else(|| {
                self.fail(format!("{origin}:{line_no}: Provider {class_name} not found"))
            })?;
            if !implements(class) {
                return Err(self.fail(format!(
                    "{origin}:{line_no}: Provider {class_name} not a subtype"
                )));
            }

            debug!(
                extension_point = self.extension_point,
                origin,
                line = line_no,
                class = class.name,
                "Discovered provider class"
            );
            discovered.push(DiscoveredClass {
                origin: origin.to_string(),
                line: line_no,
                class,
            });
        }
        Ok(())
    }

    fn fail(&self, message: String) -> Error {
        Error::configuration(format!("{}: {message}", self.extension_point))
    }

    fn fail_with<M, E>(&self, message: M, source: E) -> Error
    where
        M: std::fmt::Display,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::configuration_with_source(
            format!("{}: {message}: {source}", self.extension_point),
            source,
        )
    }
}
