//! pants-ide-core - Building and running JVM projects through Pants from an IDE
//!
//! This crate provides functionality to:
//! - Compare Pants versions and probe what an installed Pants supports
//! - Invoke Pants to compile only what changed, streaming its output
//! - Classify build output lines into compiler messages
//! - Reconcile a run configuration's classpath with what Pants exported
pub mod build;
pub mod classpath;
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod output;
pub mod services;
pub mod types;
pub mod utils;
pub mod version;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use build::{BuildInvoker, BuildOutcome, BuildRequest, PantsBuildTarget};
pub use classpath::{ClasspathRunExtension, reconcile_classpath};
pub use command::{PantsCommand, ProcessOutput};
pub use config::Config;
pub use output::{CompilerMessage, Severity, classify};
pub use version::compare_versions;
