use anyhow::{Context, Result, bail};
use pants_ide_core::{
    BuildInvoker, BuildOutcome, BuildRequest, Config, Error, PantsBuildTarget,
    interfaces::DirtyFile,
    services::SystemProcessLauncher,
};
use std::path::Path;
use tracing::{debug, info};

use crate::display::ConsoleSink;

#[derive(Debug, Clone, Default)]
pub struct CompileArgs {
    pub rebuild: bool,
    pub targets: Vec<String>,
    pub dirty: Vec<String>,
    pub dry_run: bool,
}

/// Parse `path=addr[,addr...]`.
fn parse_dirty(spec: &str) -> Result<DirtyFile> {
    let Some((path, addresses)) = spec.split_once('=') else {
        bail!("Expected FILE=TARGET[,TARGET...], got '{spec}'");
    };
    let addresses = addresses
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty());
    Ok(DirtyFile::new(path, addresses))
}

pub fn compile_command(cwd: &Path, args: CompileArgs) -> Result<()> {
    let config = Config::load(cwd).context("Failed to load configuration")?;
    let dirty = args
        .dirty
        .iter()
        .map(|spec| parse_dirty(spec))
        .collect::<Result<Vec<_>>>()?;
    let target = PantsBuildTarget::new(config.pants_executable_path(), args.targets);
    let request = BuildRequest {
        forced_rebuild: args.rebuild,
    };
    debug!("Building {:?} with {} dirty files", target, dirty.len());

    let launcher = SystemProcessLauncher::new();
    let policy = config.target_policy();
    let invoker = BuildInvoker::new(&launcher, &policy).with_env(config.env());

    if args.dry_run {
        match invoker.prepare(&target, request, &dirty)? {
            Some(prepared) => {
                println!("{}", prepared.command.to_shell_command());
                if let Some(ref dir) = prepared.command.working_dir {
                    println!("Working directory: {}", dir.display());
                }
                if !prepared.command.env.is_empty() {
                    println!("Environment variables:");
                    for (key, value) in &prepared.command.env {
                        println!("  {key}={value}");
                    }
                }
            }
            None => println!("{}", pants_ide_core::build::invoker::NO_CHANGES_MESSAGE),
        }
        return Ok(());
    }

    let mut sink = ConsoleSink::new();
    match invoker.build(&target, request, &dirty, &mut sink) {
        Ok(BuildOutcome::UpToDate) => Ok(()),
        Ok(BuildOutcome::Succeeded(_)) => {
            info!("Build finished with {} errors, {} warnings", sink.errors, sink.warnings);
            Ok(())
        }
        Err(Error::BuildFailed { exit_code, .. }) => {
            eprintln!("Pants build failed");
            std::process::exit(exit_code.unwrap_or(1));
        }
        Err(e) => Err(e).context("Build could not be started"),
    }
}
