//! Default implementations of the host ports

pub mod default_path_resolver;
pub mod json_module;
pub mod pants_layout;
pub mod pants_target_policy;
pub mod system_launcher;

pub use default_path_resolver::DefaultPathResolver;
pub use json_module::JsonModule;
pub use pants_layout::PantsProjectLayout;
pub use pants_target_policy::PantsTargetPolicy;
pub use system_launcher::SystemProcessLauncher;
