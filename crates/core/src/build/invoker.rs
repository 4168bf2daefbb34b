use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::command::{PantsCommand, ProcessOutput};
use crate::error::{Error, Result};
use crate::interfaces::{DirtyFile, DirtyFiles, MessageSink, ProcessLauncher, TargetPolicy};
use crate::output::{CompilerMessage, classify, strip_ansi_escapes};
use crate::types::TargetAddress;

use super::plan::{BuildPlan, COMPILE_GOAL, assemble_command, has_dirty_targets};
use super::probe::{CapabilityProbe, EXPORT_CLASSPATH_GOAL};

pub const NO_CHANGES_MESSAGE: &str = "No changes to compile.";

/// The Pants project being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantsBuildTarget {
    pub pants_executable: PathBuf,
    /// Every target address imported into the project
    pub target_addresses: BTreeSet<TargetAddress>,
}

impl PantsBuildTarget {
    pub fn new<I, T>(pants_executable: impl Into<PathBuf>, addresses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetAddress>,
    {
        Self {
            pants_executable: pants_executable.into(),
            target_addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildRequest {
    /// Rebuild everything from a clean state, regardless of dirty files
    pub forced_rebuild: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Nothing was dirty; Pants was not run
    UpToDate,
    Succeeded(ProcessOutput),
}

/// What a build would run, decided before Pants is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBuild {
    pub plan: BuildPlan,
    pub command: PantsCommand,
}

/// Runs a build through Pants and reports its output to the host.
pub struct BuildInvoker<'a> {
    launcher: &'a dyn ProcessLauncher,
    policy: &'a dyn TargetPolicy,
    env: Vec<(String, String)>,
}

impl<'a> BuildInvoker<'a> {
    pub fn new(launcher: &'a dyn ProcessLauncher, policy: &'a dyn TargetPolicy) -> Self {
        Self {
            launcher,
            policy,
            env: Vec::new(),
        }
    }

    /// Environment passed to every Pants process this invoker starts.
    pub fn with_env(mut self, env: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env.extend(env);
        self
    }

    /// Probe Pants and assemble the command that would build `target`.
    ///
    /// `None` when nothing needs compiling. Only the capability probes are
    /// run; the build itself is not started.
    pub fn prepare(
        &self,
        target: &PantsBuildTarget,
        request: BuildRequest,
        dirty_files: &[DirtyFile],
    ) -> Result<Option<PreparedBuild>> {
        if !request.forced_rebuild && !has_dirty_targets(dirty_files, self.policy) {
            tracing::debug!("No dirty targets, skipping Pants");
            return Ok(None);
        }

        let probe = CapabilityProbe::new(self.launcher, &target.pants_executable, &self.env);
        let supports_export_classpath = probe.supports_export_classpath();
        let goals: &[&str] = if supports_export_classpath {
            &[EXPORT_CLASSPATH_GOAL, COMPILE_GOAL]
        } else {
            &[COMPILE_GOAL]
        };

        let plan = if request.forced_rebuild {
            BuildPlan::full(goals, &target.target_addresses, self.policy)
        } else {
            BuildPlan::incremental(goals, dirty_files, self.policy)
        };

        let capabilities = probe.capabilities(supports_export_classpath)?;
        let command = self
            .env
            .iter()
            .cloned()
            .fold(
                assemble_command(&target.pants_executable, &capabilities, &plan)?,
                |cmd, (key, value)| cmd.with_env(key, value),
            );

        Ok(Some(PreparedBuild { plan, command }))
    }

    /// Build `target`, streaming every line Pants prints into `sink`.
    ///
    /// Blocks until Pants exits. A non-zero exit becomes
    /// [`Error::BuildFailed`] carrying Pants' stderr.
    pub fn build(
        &self,
        target: &PantsBuildTarget,
        request: BuildRequest,
        dirty: &dyn DirtyFiles,
        sink: &mut dyn MessageSink,
    ) -> Result<BuildOutcome> {
        let dirty_files = dirty.dirty_files()?;
        let Some(PreparedBuild { plan, command }) = self.prepare(target, request, &dirty_files)?
        else {
            sink.message(CompilerMessage::info(NO_CHANGES_MESSAGE));
            return Ok(BuildOutcome::UpToDate);
        };

        let announcement = plan.recompile_message();
        sink.message(CompilerMessage::info(announcement.as_str()));
        sink.progress(&announcement);

        tracing::info!("Running: {}", command.to_shell_command());
        let output = self.launcher.stream(&command, &mut |stream, line| {
            sink.message(classify(&strip_ansi_escapes(line), stream));
        })?;

        if !output.check_success() {
            return Err(Error::BuildFailed {
                stderr: strip_ansi_escapes(&output.stderr).into_owned(),
                exit_code: output.exit_code,
            });
        }

        tracing::info!("Pants build finished");
        Ok(BuildOutcome::Succeeded(output))
    }
}
