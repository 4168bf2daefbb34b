/// Exit status and captured text of a finished Pants process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Like [`success`](Self::success), but logs why a run did not succeed.
    pub fn check_success(&self) -> bool {
        match self.exit_code {
            Some(0) => true,
            Some(code) => {
                tracing::warn!("Pants exited with code {}: {}", code, self.stderr.trim());
                false
            }
            None => {
                tracing::warn!("Pants was terminated by a signal");
                false
            }
        }
    }
}
