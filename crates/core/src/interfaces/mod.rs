//! Ports to the host environment.
//!
//! The core never talks to an IDE directly. Everything it needs from its
//! host (dirty files, a place to report messages, module metadata, the run
//! configuration being launched, a way to start processes) comes in through
//! these traits, so tests and the command-line host can provide their own.

pub mod dirty_files;
pub mod host;
pub mod message_sink;
pub mod module;
pub mod path_resolver;
pub mod process_launcher;
pub mod project_layout;
pub mod run_configuration;
pub mod target_policy;

pub use dirty_files::{DirtyFile, DirtyFiles};
pub use host::HostEnvironment;
pub use message_sink::{CollectingSink, MessageSink, SinkEvent};
pub use module::{
    LIBRARY_EXCLUDES_KEY, ModuleMetadata, TARGET_ADDRESS_INFOS_KEY, TARGET_ADDRESSES_KEY,
};
pub use path_resolver::PathResolver;
pub use process_launcher::ProcessLauncher;
pub use project_layout::ProjectLayout;
pub use run_configuration::{PANTS_MAKE_BEFORE_RUN_ID, RunConfiguration};
pub use target_policy::TargetPolicy;
