//! Filesystem queries used when probing for published artifacts.
//!
//! Kept behind a trait so artifact resolution can run against a virtual
//! file system in hosts that have one.

use std::path::{Path, PathBuf};

/// Trait for path resolution operations
pub trait PathResolver: Send + Sync {
    /// Check if a path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Get the parent directory of a path
    fn parent(&self, path: &Path) -> Option<PathBuf>;

    /// Make a path absolute against the current directory
    fn absolute(&self, path: &Path) -> PathBuf;
}
