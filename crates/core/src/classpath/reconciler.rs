use std::path::Path;

use crate::error::{Error, Result};

use super::allow_list::AllowList;

/// How users regenerate a missing manifest jar.
pub const EXPORT_CLASSPATH_COMMAND: &str = "./pants export-classpath ...";

/// Keep the host-owned entries of `existing` and append Pants' manifest jar.
///
/// The manifest is always the last entry. Every entry of the result either
/// came from `existing` or is the manifest itself.
pub fn reconcile_classpath(
    existing: &[String],
    allow_list: &AllowList,
    manifest_jar: Option<&Path>,
) -> Result<Vec<String>> {
    let manifest = manifest_jar.ok_or_else(|| Error::ManifestNotFound {
        command: EXPORT_CLASSPATH_COMMAND.to_string(),
    })?;

    let mut classpath = allow_list.filter(existing);
    tracing::debug!(
        "Kept {} of {} classpath entries",
        classpath.len(),
        existing.len()
    );
    classpath.push(manifest.to_string_lossy().into_owned());
    Ok(classpath)
}
