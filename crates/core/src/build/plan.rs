use std::collections::BTreeSet;
use std::path::Path;

use crate::command::PantsCommand;
use crate::command::pants_command::NO_COLORS;
use crate::error::Result;
use crate::interfaces::{DirtyFile, TargetPolicy};
use crate::types::{BuildCapabilities, TargetAddress};

pub const CLEAN_ALL_GOAL: &str = "clean-all";
pub const COMPILE_GOAL: &str = "compile";
/// Asks `export-classpath` to name published entries by target id
pub const NO_OLD_NAMING_STYLE_FLAG: &str = "--no-export-classpath-use-old-naming-style";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Forced rebuild of every target, starting from `clean-all`
    Full,
    /// Only the targets owning dirty files
    Incremental,
}

/// Goals and targets for one Pants invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub mode: BuildMode,
    pub goals: Vec<String>,
    pub targets: Vec<TargetAddress>,
}

impl BuildPlan {
    /// `clean-all`, then `goals`, over every non-generated target.
    pub fn full<'t>(
        goals: &[&str],
        targets: impl IntoIterator<Item = &'t TargetAddress>,
        policy: &dyn TargetPolicy,
    ) -> Self {
        let goals = std::iter::once(CLEAN_ALL_GOAL)
            .chain(goals.iter().copied())
            .map(String::from)
            .collect();
        Self {
            mode: BuildMode::Full,
            goals,
            targets: non_generated(targets, policy),
        }
    }

    /// `goals` over the non-generated targets owning any dirty file.
    pub fn incremental(goals: &[&str], dirty: &[DirtyFile], policy: &dyn TargetPolicy) -> Self {
        let owners = dirty.iter().flat_map(|file| file.target_addresses.iter());
        Self {
            mode: BuildMode::Incremental,
            goals: goals.iter().map(|g| g.to_string()).collect(),
            targets: non_generated(owners, policy),
        }
    }

    /// Status line announcing the build
    pub fn recompile_message(&self) -> String {
        match (self.mode, self.targets.as_slice()) {
            (BuildMode::Full, targets) => format!("Recompiling all {} targets", targets.len()),
            (BuildMode::Incremental, [single]) => format!("Recompiling {single}"),
            (BuildMode::Incremental, targets) => format!("Recompiling {} targets", targets.len()),
        }
    }
}

/// Sorted, de-duplicated addresses with generated targets removed.
pub fn non_generated<'t>(
    addresses: impl IntoIterator<Item = &'t TargetAddress>,
    policy: &dyn TargetPolicy,
) -> Vec<TargetAddress> {
    addresses
        .into_iter()
        .filter(|address| !policy.is_generated(address))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A dirty file only counts when its source root has no generated target.
pub fn has_dirty_targets(dirty: &[DirtyFile], policy: &dyn TargetPolicy) -> bool {
    dirty
        .iter()
        .any(|file| !policy.contains_generated(&file.target_addresses))
}

/// The main build command: flags, then goals, then targets.
pub fn assemble_command(
    executable: &Path,
    capabilities: &BuildCapabilities,
    plan: &BuildPlan,
) -> Result<PantsCommand> {
    let mut command = PantsCommand::new(executable).arg(NO_COLORS);
    if capabilities.use_target_id_naming()? {
        command = command.arg(NO_OLD_NAMING_STYLE_FLAG);
    }
    Ok(command
        .args(plan.goals.iter().cloned())
        .args(plan.targets.iter().map(ToString::to_string)))
}
