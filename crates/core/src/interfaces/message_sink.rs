use crate::output::CompilerMessage;

/// Receives build messages in the order they are produced.
///
/// Implementations must not block for long: they are called on the thread
/// that drains the Pants process output.
pub trait MessageSink {
    fn message(&mut self, message: CompilerMessage);

    /// Short status text for a progress indicator
    fn progress(&mut self, text: &str);
}

/// Everything a [`CollectingSink`] has seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Message(CompilerMessage),
    Progress(String),
}

/// Sink that records every event, for tests and buffered hosts.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub events: Vec<SinkEvent>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> impl Iterator<Item = &CompilerMessage> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Message(message) => Some(message),
            SinkEvent::Progress(_) => None,
        })
    }

    pub fn progress_updates(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Progress(text) => Some(text.as_str()),
            SinkEvent::Message(_) => None,
        })
    }
}

impl MessageSink for CollectingSink {
    fn message(&mut self, message: CompilerMessage) {
        self.events.push(SinkEvent::Message(message));
    }

    fn progress(&mut self, text: &str) {
        self.events.push(SinkEvent::Progress(text.to_string()));
    }
}
