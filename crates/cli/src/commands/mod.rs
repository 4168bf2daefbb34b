pub mod classpath;
pub mod compile;
pub mod excludes;
pub mod published;
pub mod version;

pub use classpath::classpath_command;
pub use compile::{CompileArgs, compile_command};
pub use excludes::excludes_command;
pub use published::published_command;
pub use version::version_compare_command;

use anyhow::{Context, Result};
use pants_ide_core::services::JsonModule;
use std::path::Path;

/// Read a module description written as JSON.
pub(crate) fn load_module(path: &Path) -> Result<JsonModule> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read module file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse module file {}", path.display()))
}
