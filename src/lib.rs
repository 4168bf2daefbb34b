//! Facade over `pants-ide-core` for the workspace integration tests.
pub use pants_ide_core::*;
