//! Pants command lines and their captured results

pub mod pants_command;
pub mod process_output;

pub use pants_command::PantsCommand;
pub use process_output::ProcessOutput;
