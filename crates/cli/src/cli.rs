use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    CompileArgs, classpath_command, compile_command, excludes_command, published_command,
    version_compare_command,
};

#[derive(Parser, Debug)]
#[command(name = "pants-ide")]
#[command(version, about, long_about = None, propagate_version = true)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Directory to start the config file search from (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile changed targets through Pants
    #[command(visible_alias = "c")]
    Compile {
        /// Rebuild every target from a clean state
        #[arg(short, long)]
        rebuild: bool,

        /// Target address of the project, repeatable (e.g., src/java/org/foo:lib)
        #[arg(short, long = "target")]
        targets: Vec<String>,

        /// Changed file and its owning targets (e.g., src/java/Foo.java=src/java:lib)
        #[arg(short, long = "dirty")]
        dirty: Vec<String>,

        /// Print the command without executing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Rewrite a run configuration's classpath for a Pants built module
    Classpath {
        /// JSON description of the module being run
        #[arg(short, long)]
        module: PathBuf,

        /// Current classpath, separated like PATH
        #[arg(long, default_value = "")]
        classpath: String,

        /// Before-run task ids of the configuration (defaults to the Pants make step)
        #[arg(long = "before-run")]
        before_run: Vec<String>,
    },
    /// List the per-target artifacts published by export-classpath
    Published {
        /// JSON description of the module
        #[arg(short, long)]
        module: PathBuf,
    },
    /// List library excludes over a module's runtime dependencies
    Excludes {
        /// JSON description of the module
        #[arg(short, long)]
        module: PathBuf,
    },
    /// Compare two dot-separated versions, printing -1, 0 or 1
    VersionCompare { left: String, right: String },
}

impl Cli {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let cwd = match self.cwd {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to read the current directory")?,
        };

        match self.command {
            Commands::Compile {
                rebuild,
                targets,
                dirty,
                dry_run,
            } => compile_command(
                &cwd,
                CompileArgs {
                    rebuild,
                    targets,
                    dirty,
                    dry_run,
                },
            ),
            Commands::Classpath {
                module,
                classpath,
                before_run,
            } => classpath_command(&cwd, &module, &classpath, before_run),
            Commands::Published { module } => published_command(&cwd, &module),
            Commands::Excludes { module } => excludes_command(&cwd, &module),
            Commands::VersionCompare { left, right } => version_compare_command(&left, &right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compile() {
        let cli = Cli::parse_from([
            "pants-ide",
            "compile",
            "--dirty",
            "a/A.java=a:lib",
            "-t",
            "a:lib",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Compile {
                rebuild,
                targets,
                dirty,
                dry_run,
            } => {
                assert!(!rebuild);
                assert!(dry_run);
                assert_eq!(targets, vec!["a:lib"]);
                assert_eq!(dirty, vec!["a/A.java=a:lib"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cwd_is_global() {
        let cli = Cli::parse_from(["pants-ide", "published", "-m", "m.json", "-C", "/repo"]);
        assert_eq!(cli.cwd, Some(PathBuf::from("/repo")));
    }
}
