use anyhow::{Context, Result};
use pants_ide_core::{
    ClasspathRunExtension, Config,
    interfaces::{ModuleMetadata, PANTS_MAKE_BEFORE_RUN_ID, RunConfiguration},
    services::{DefaultPathResolver, JsonModule, PantsProjectLayout},
};
use std::path::Path;
use tracing::info;

use super::load_module;

/// A run configuration described on the command line.
struct CommandLineRun {
    before_run: Vec<String>,
    module: JsonModule,
    classpath: Vec<String>,
}

impl RunConfiguration for CommandLineRun {
    fn before_run_task_ids(&self) -> Vec<String> {
        self.before_run.clone()
    }

    fn module(&self) -> Option<&dyn ModuleMetadata> {
        Some(&self.module as &dyn ModuleMetadata)
    }

    fn classpath_mut(&mut self) -> &mut Vec<String> {
        &mut self.classpath
    }
}

fn split_classpath(classpath: &str) -> Vec<String> {
    if classpath.is_empty() {
        return Vec::new();
    }
    std::env::split_paths(classpath)
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty())
        .collect()
}

pub fn classpath_command(
    cwd: &Path,
    module_path: &Path,
    classpath: &str,
    before_run: Vec<String>,
) -> Result<()> {
    let config = Config::load(cwd).context("Failed to load configuration")?;
    let before_run = if before_run.is_empty() {
        vec![PANTS_MAKE_BEFORE_RUN_ID.to_string()]
    } else {
        before_run
    };
    let mut run = CommandLineRun {
        before_run,
        module: load_module(module_path)?,
        classpath: split_classpath(classpath),
    };

    let layout = PantsProjectLayout::new(config.build_root(), DefaultPathResolver);
    let extension = ClasspathRunExtension::new(&config, &layout, &DefaultPathResolver);
    if !extension.update_run_classpath(&mut run)? {
        info!("{} is not built by Pants, classpath left unchanged", run.module.name);
    }

    for entry in &run.classpath {
        println!("{entry}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_classpath() {
        assert!(split_classpath("").is_empty());
        let joined = std::env::join_paths(["/a.jar", "/b.jar"]).unwrap();
        assert_eq!(split_classpath(joined.to_str().unwrap()), vec!["/a.jar", "/b.jar"]);
    }
}
