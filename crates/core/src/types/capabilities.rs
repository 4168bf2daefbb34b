use crate::error::Result;
use crate::version::version_at_least;

/// Export schema version from which published classpath entries are named by target id.
pub const TARGET_ID_EXPORT_VERSION: &str = "1.0.5";

/// What the Pants install behind a build supports, probed once per build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildCapabilities {
    /// `./pants goals` lists `export-classpath`
    pub supports_export_classpath: bool,
    /// `./pants options` knows the `export-classpath-use-old-naming-style` flag
    pub supports_naming_style_flag: bool,
    /// `version` field reported by `./pants export`
    pub export_schema_version: String,
}

impl BuildCapabilities {
    /// Whether the build should ask for target-id based naming of published artifacts.
    ///
    /// Both the flag and an export schema of at least 1.0.5 are required. The
    /// version is always checked so a malformed one fails the build.
    pub fn use_target_id_naming(&self) -> Result<bool> {
        let schema_has_target_id =
            version_at_least(&self.export_schema_version, TARGET_ID_EXPORT_VERSION)?;
        Ok(self.supports_naming_style_flag && schema_has_target_id)
    }
}
