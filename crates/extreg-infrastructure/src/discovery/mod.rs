//! Filesystem discovery

pub mod filesystem;

pub use filesystem::DirectoryResourceLocator;
