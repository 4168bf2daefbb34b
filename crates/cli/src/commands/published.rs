use anyhow::{Context, Result};
use pants_ide_core::{
    ClasspathRunExtension, Config,
    services::{DefaultPathResolver, PantsProjectLayout},
};
use std::path::Path;
use tracing::debug;

use super::load_module;

pub fn published_command(cwd: &Path, module_path: &Path) -> Result<()> {
    let config = Config::load(cwd).context("Failed to load configuration")?;
    let module = load_module(module_path)?;
    debug!("Looking up published classpath of {}", module.name);

    let layout = PantsProjectLayout::new(config.build_root(), DefaultPathResolver);
    let extension = ClasspathRunExtension::new(&config, &layout, &DefaultPathResolver);
    for entry in extension.find_published_classpath(&module)? {
        println!("{entry}");
    }
    Ok(())
}
