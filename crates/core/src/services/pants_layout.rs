use std::path::PathBuf;

use crate::interfaces::{PathResolver, ProjectLayout};

/// `dist/` layout written by `./pants export-classpath` under the build root.
pub struct PantsProjectLayout<R: PathResolver> {
    build_root: PathBuf,
    resolver: R,
}

impl<R: PathResolver> PantsProjectLayout<R> {
    pub fn new(build_root: impl Into<PathBuf>, resolver: R) -> Self {
        Self {
            build_root: build_root.into(),
            resolver,
        }
    }

    fn dist(&self) -> PathBuf {
        self.build_root.join("dist")
    }
}

impl<R: PathResolver> ProjectLayout for PantsProjectLayout<R> {
    fn manifest_jar(&self) -> Option<PathBuf> {
        let manifest = self.dist().join("manifest.jar");
        self.resolver.is_file(&manifest).then_some(manifest)
    }

    fn export_classpath_dir(&self) -> Option<PathBuf> {
        let dir = self.dist().join("export-classpath");
        self.resolver.is_dir(&dir).then_some(dir)
    }
}
