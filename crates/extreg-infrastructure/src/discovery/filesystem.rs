//! Discovery resources read from search directories
//!
//! A resource named `extensions/app::codec::Codec` is looked up as the file
//! `<search path>/extensions/app::codec::Codec` in every search path.
//! Names with segments that would leave the search path, such as `..`,
//! match nothing.

use std::path::{Component, Path, PathBuf};

use extreg_domain::{DiscoveryResource, ResourceLocator, Result};
use tracing::trace;

/// Locator serving discovery resources from a list of directories
///
/// Directories are searched in order and every match is returned, so a
/// resource may be contributed by several directories. Missing directories
/// and missing files are skipped.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResourceLocator {
    search_paths: Vec<PathBuf>,
}

impl DirectoryResourceLocator {
    /// Locator over the given directories, searched in order
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a search directory
    pub fn with_search_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// The configured search directories
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn candidate(root: &Path, name: &str) -> Option<PathBuf> {
        let mut path = root.to_path_buf();
        for segment in name.split('/').filter(|segment| !segment.is_empty()) {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => path.push(part),
                _ => return None,
            }
        }
        Some(path)
    }
}

impl ResourceLocator for DirectoryResourceLocator {
    fn locate(&self, name: &str) -> Result<Vec<DiscoveryResource>> {
        let mut resources = Vec::new();
        for root in &self.search_paths {
            let Some(candidate) = Self::candidate(root, name) else {
                trace!(name, "Resource name leaves the search path, skipped");
                continue;
            };
            if candidate.is_file() {
                resources.push(DiscoveryResource::from_file(candidate));
            } else {
                trace!(path = %candidate.display(), "No discovery resource");
            }
        }
        Ok(resources)
    }
}
