use serde::Deserialize;
use std::path::Path;

use crate::command::PantsCommand;
use crate::command::pants_command::NO_COLORS;
use crate::error::{Error, Result};
use crate::interfaces::ProcessLauncher;
use crate::types::BuildCapabilities;

pub const EXPORT_CLASSPATH_GOAL: &str = "export-classpath";
/// Option listed by `./pants options` when the naming-style switch exists
pub const USE_OLD_NAMING_STYLE_OPTION: &str = "export-classpath-use-old-naming-style";

#[derive(Debug, Deserialize)]
struct SimpleExportResult {
    version: String,
}

/// Short preliminary Pants calls that detect what the install supports.
///
/// Answers are read from stdout whatever the exit code. The `goals` probe
/// degrades to "unsupported" when Pants cannot be started. The `options` and
/// `export` probes gate version-dependent flags, so a launch failure or an
/// unreadable export fails the build instead of guessing.
pub struct CapabilityProbe<'a> {
    launcher: &'a dyn ProcessLauncher,
    executable: &'a Path,
    env: &'a [(String, String)],
}

impl<'a> CapabilityProbe<'a> {
    pub fn new(
        launcher: &'a dyn ProcessLauncher,
        executable: &'a Path,
        env: &'a [(String, String)],
    ) -> Self {
        Self {
            launcher,
            executable,
            env,
        }
    }

    fn command(&self) -> PantsCommand {
        self.env.iter().fold(PantsCommand::new(self.executable), |cmd, (k, v)| {
            cmd.with_env(k.clone(), v.clone())
        })
    }

    /// Run `args` and return its stdout. Only a launch failure is an error;
    /// a non-zero exit is logged and the output is still used.
    fn run(&self, probe: &str, args: &[&str]) -> Result<String> {
        let command = self.command().args(args.iter().copied());
        let output = self
            .launcher
            .capture(&command)
            .map_err(|e| Error::probe(probe, e))?;
        if !output.success() {
            tracing::warn!(
                "./pants {} exited with {:?}: {}",
                probe,
                output.exit_code,
                output.stderr.trim()
            );
        }
        Ok(output.stdout)
    }

    /// `./pants goals` lists `export-classpath`.
    pub fn supports_export_classpath(&self) -> bool {
        match self.run("goals", &["goals"]) {
            Ok(stdout) => stdout.contains(EXPORT_CLASSPATH_GOAL),
            Err(e) => {
                tracing::warn!("Assuming no export-classpath: {}", e);
                false
            }
        }
    }

    /// `./pants options` knows the old-naming-style switch.
    pub fn supports_naming_style_flag(&self) -> Result<bool> {
        let stdout = self.run("options", &["options", NO_COLORS])?;
        Ok(stdout.contains(USE_OLD_NAMING_STYLE_OPTION))
    }

    /// The `version` field of `./pants export`.
    pub fn export_schema_version(&self) -> Result<String> {
        let stdout = self.run("export", &["export", NO_COLORS])?;
        let result: SimpleExportResult = serde_json::from_str(&stdout)
            .map_err(|e| Error::probe("export", format!("unreadable export JSON: {e}")))?;
        Ok(result.version)
    }

    /// Run the two hard probes, filling in a previously probed goals answer.
    pub fn capabilities(&self, supports_export_classpath: bool) -> Result<BuildCapabilities> {
        let supports_naming_style_flag = self.supports_naming_style_flag()?;
        let export_schema_version = self.export_schema_version()?;
        tracing::debug!(
            "Pants capabilities: export-classpath={}, naming-style flag={}, export version={}",
            supports_export_classpath,
            supports_naming_style_flag,
            export_schema_version
        );
        Ok(BuildCapabilities {
            supports_export_classpath,
            supports_naming_style_flag,
            export_schema_version,
        })
    }
}
