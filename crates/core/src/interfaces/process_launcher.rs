use crate::command::{PantsCommand, ProcessOutput};
use crate::error::Result;
use crate::output::StreamKind;

/// Starts Pants processes on behalf of the core.
pub trait ProcessLauncher {
    /// Run to completion and return everything it printed.
    fn capture(&self, command: &PantsCommand) -> Result<ProcessOutput>;

    /// Run to completion, handing each output line to `on_line` as soon as it
    /// is read. Lines of one stream arrive in order; the two streams may
    /// interleave arbitrarily.
    fn stream(
        &self,
        command: &PantsCommand,
        on_line: &mut dyn FnMut(StreamKind, &str),
    ) -> Result<ProcessOutput>;
}
