use pants_ide_core::{
    CompilerMessage, Severity,
    interfaces::MessageSink,
    output::PANTS,
};

/// Prints build messages as they arrive; progress goes to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    pub errors: usize,
    pub warnings: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn format_message(message: &CompilerMessage) -> String {
    match message.severity {
        Severity::Info if message.file_path.is_none() => message.text.clone(),
        _ => message.to_string(),
    }
}

impl MessageSink for ConsoleSink {
    fn message(&mut self, message: CompilerMessage) {
        match message.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => {}
        }
        println!("{}", format_message(&message));
    }

    fn progress(&mut self, text: &str) {
        eprintln!("[{PANTS}] {text}");
    }
}
