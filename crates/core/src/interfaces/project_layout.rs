use std::path::PathBuf;

/// Where Pants publishes classpath artifacts for a project.
pub trait ProjectLayout {
    /// The manifest jar aggregating the full runtime classpath, if it exists
    fn manifest_jar(&self) -> Option<PathBuf>;

    /// Directory of per-target classpath links, if it exists
    fn export_classpath_dir(&self) -> Option<PathBuf>;
}
