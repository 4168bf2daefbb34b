use anyhow::{Context, Result};
use pants_ide_core::{Config, classpath::find_excludes};
use std::path::Path;

use super::load_module;

pub fn excludes_command(cwd: &Path, module_path: &Path) -> Result<()> {
    let config = Config::load(cwd).context("Failed to load configuration")?;
    let module = load_module(module_path)?;

    let excludes = find_excludes(&module, &config.target_policy())
        .with_context(|| format!("Invalid excludes on module {}", module.name))?;
    for (exclude, owner) in excludes {
        println!("{exclude}\t{owner}");
    }
    Ok(())
}
