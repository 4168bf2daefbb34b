//! Settings for Pants builds and run classpaths

mod settings;

pub use settings::{CONFIG_FILE_NAMES, Config, DEFAULT_PANTS_EXECUTABLE};
