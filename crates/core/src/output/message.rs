use crate::impl_case_insensitive_deserialize;
use serde::Serialize;
use std::fmt;

/// Name under which every message is reported to the host.
pub const PANTS: &str = "pants";

/// Severity of a message delivered to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl_case_insensitive_deserialize!(
    Severity,
    Error => "error",
    Warning => "warning" | "warn",
    Info => "info"
);

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(label)
    }
}

/// Which pipe of the Pants process a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// A normalized message for the host's message sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerMessage {
    pub severity: Severity,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// 1-based line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl CompilerMessage {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            file_path: None,
            line: None,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn with_location(mut self, file_path: Option<String>, line: Option<u32>) -> Self {
        self.file_path = file_path;
        self.line = line;
        self
    }

    /// Line number in the host's encoding, where -1 means unknown.
    pub fn line_or_unknown(&self) -> i64 {
        self.line.map_or(-1, i64::from)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for CompilerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file_path, self.line) {
            (Some(path), Some(line)) => write!(f, "{path}:{line}: ")?,
            (Some(path), None) => write!(f, "{path}: ")?,
            _ => {}
        }
        write!(f, "[{}] {}", self.severity, self.text)
    }
}
