use std::io::{BufRead, BufReader, Read};
use std::process::Stdio;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use crate::command::{PantsCommand, ProcessOutput};
use crate::error::{Error, Result};
use crate::interfaces::ProcessLauncher;
use crate::output::StreamKind;

/// Runs Pants as a real child process.
///
/// Streaming reads stdout and stderr on one thread each and forwards lines
/// over a channel, so the caller's callback always runs on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessLauncher;

impl SystemProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for SystemProcessLauncher {
    fn capture(&self, command: &PantsCommand) -> Result<ProcessOutput> {
        tracing::debug!("Running: {}", command.to_shell_command());
        let output = command
            .to_process_command()
            .stdin(Stdio::null())
            .output()
            .map_err(Error::ProcessLaunch)?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }

    fn stream(
        &self,
        command: &PantsCommand,
        on_line: &mut dyn FnMut(StreamKind, &str),
    ) -> Result<ProcessOutput> {
        tracing::debug!("Streaming: {}", command.to_shell_command());
        let mut child = command
            .to_process_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(Error::ProcessLaunch)?;

        let (tx, rx) = mpsc::channel();
        let readers = [
            spawn_reader(child.stdout.take(), StreamKind::Stdout, tx.clone()),
            spawn_reader(child.stderr.take(), StreamKind::Stderr, tx),
        ];

        let mut output = ProcessOutput::default();
        // Ends once both readers have hit EOF and dropped their senders
        for (kind, line) in rx {
            on_line(kind, &line);
            let buffer = match kind {
                StreamKind::Stdout => &mut output.stdout,
                StreamKind::Stderr => &mut output.stderr,
            };
            buffer.push_str(&line);
            buffer.push('\n');
        }

        for reader in readers {
            if reader.join().is_err() {
                tracing::warn!("Output reader thread panicked");
            }
        }

        let status = child.wait()?;
        output.exit_code = status.code();
        Ok(output)
    }
}

fn spawn_reader<R>(
    pipe: Option<R>,
    kind: StreamKind,
    tx: Sender<(StreamKind, String)>,
) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let Some(pipe) = pipe else {
            return;
        };
        let mut reader = BufReader::new(pipe);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    let line = line.trim_end_matches(['\r', '\n']).to_string();
                    if tx.send((kind, line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read Pants {:?}: {}", kind, e);
                    break;
                }
            }
        }
    })
}
