use std::io;

/// Errors that can occur while building through Pants or preparing a run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A capability probe that the build cannot proceed without failed.
    #[error("./pants {probe} failed: {reason}")]
    ProbeFailed { probe: String, reason: String },

    #[error("Failed to launch Pants: {0}")]
    ProcessLaunch(#[source] io::Error),

    #[error("{stderr}")]
    BuildFailed {
        stderr: String,
        exit_code: Option<i32>,
    },

    #[error("manifest.jar is not found. It should be generated by `{command}`")]
    ManifestNotFound { command: String },

    #[error("Invalid version segment '{segment}' in '{version}'")]
    VersionParse { version: String, segment: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn probe(probe: impl Into<String>, reason: impl ToString) -> Self {
        Self::ProbeFailed {
            probe: probe.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for pants-ide operations
pub type Result<T> = std::result::Result<T, Error>;
