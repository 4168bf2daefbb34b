//! Default path resolver implementation
//!
//! Provides standard file system based path resolution.

use crate::interfaces::PathResolver;
use std::path::{Path, PathBuf};

/// Default implementation of PathResolver using std::fs
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPathResolver;

impl DefaultPathResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PathResolver for DefaultPathResolver {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn parent(&self, path: &Path) -> Option<PathBuf> {
        path.parent().map(|p| p.to_path_buf())
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_and_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.jar");
        std::fs::write(&file, b"").unwrap();

        let resolver = DefaultPathResolver::new();
        assert!(resolver.is_file(&file));
        assert!(!resolver.is_dir(&file));
        assert!(resolver.is_dir(temp.path()));
        assert_eq!(resolver.parent(&file).as_deref(), Some(temp.path()));
    }

    #[test]
    fn test_absolute() {
        let resolver = DefaultPathResolver::new();
        assert!(resolver.absolute(Path::new("relative/dir")).is_absolute());
    }
}
