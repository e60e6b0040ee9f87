//! Discovery collaborators
//!
//! A [`ResourceLocator`] answers "which discovery resources exist under this
//! name", a [`ClassResolver`] answers "which linked provider class has this
//! name". Both are consulted once per extension point, when its registry is
//! built.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::Result;
use crate::value_objects::ProviderClass;

/// Locates discovery resources by name
///
/// Implementations return every resource with the requested name across
/// their search space, in a stable order. Resources with the same name from
/// different origins are all merged by the caller.
pub trait ResourceLocator: Send + Sync {
    /// All resources named `name`, in merge order
    fn locate(&self, name: &str) -> Result<Vec<DiscoveryResource>>;
}

/// Resolves fully-qualified provider class names
pub trait ClassResolver: Send + Sync {
    /// The linked class with this exact name
    fn resolve(&self, name: &str) -> Option<&'static ProviderClass>;

    /// Every class known to the resolver, ordered by name
    fn classes(&self) -> Vec<&'static ProviderClass>;
}

enum ResourceContent {
    Static(&'static str),
    Owned(String),
    File(PathBuf),
}

/// A readable discovery resource
///
/// The `origin` identifies where the resource came from (a file path, a
/// module path for embedded manifests) and appears in every error raised
/// while parsing it.
pub struct DiscoveryResource {
    origin: String,
    content: ResourceContent,
}

impl DiscoveryResource {
    /// Resource backed by static text (e.g., `include_str!`)
    pub fn from_static<S: Into<String>>(origin: S, contents: &'static str) -> Self {
        Self {
            origin: origin.into(),
            content: ResourceContent::Static(contents),
        }
    }

    /// Resource backed by owned text
    pub fn from_string<S: Into<String>>(origin: S, contents: String) -> Self {
        Self {
            origin: origin.into(),
            content: ResourceContent::Owned(contents),
        }
    }

    /// Resource backed by a file, read when opened
    pub fn from_file(path: PathBuf) -> Self {
        Self {
            origin: path.display().to_string(),
            content: ResourceContent::File(path),
        }
    }

    /// Where the resource came from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Open the resource for line-by-line reading
    pub fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        match &self.content {
            ResourceContent::Static(contents) => Ok(Box::new(contents.as_bytes())),
            ResourceContent::Owned(contents) => Ok(Box::new(contents.as_bytes())),
            ResourceContent::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

impl fmt::Debug for DiscoveryResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryResource")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
