//! Turning raw Pants output into leveled compiler messages.
//!
//! Each line read from the Pants process is classified on its own: lines that
//! carry a `[level] path:line:` marker become located messages, everything
//! else falls back to keyword matching.

pub mod ansi;
pub mod classifier;
pub mod marker;
pub mod message;

pub use ansi::strip_ansi_escapes;
pub use classifier::{classify, is_error_line, is_warning_line};
pub use marker::{MarkerLevel, OutputMarker};
pub use message::{CompilerMessage, PANTS, Severity, StreamKind};
