use super::marker::{MarkerLevel, OutputMarker};
use super::message::{CompilerMessage, Severity, StreamKind};

/// Keywords marking a line as an error when it has no structured marker.
const ERROR_PATTERNS: &[&str] = &["[error]", "ERROR]"];
const WARNING_PATTERNS: &[&str] = &["[warn]", "[warning]", "WARN]"];

pub fn is_error_line(text: &str) -> bool {
    ERROR_PATTERNS.iter().any(|p| text.contains(p))
}

pub fn is_warning_line(text: &str) -> bool {
    WARNING_PATTERNS.iter().any(|p| text.contains(p))
}

/// Classify one line of Pants output.
///
/// Never fails: a line that matches nothing becomes an unlocated `Info`
/// message. Anything read from stderr is reported as an error.
pub fn classify(raw_line: &str, stream: StreamKind) -> CompilerMessage {
    let raw_line = raw_line.trim_end_matches(['\r', '\n']);

    let Some(marker) = OutputMarker::parse(raw_line) else {
        let text = raw_line.trim();
        let severity = if stream == StreamKind::Stderr
            || is_error_line(text)
            || text.starts_with("FAILURE")
        {
            Severity::Error
        } else if is_warning_line(text) {
            Severity::Warning
        } else {
            Severity::Info
        };
        return CompilerMessage::new(severity, text);
    };

    let severity = if stream == StreamKind::Stderr || marker.level == MarkerLevel::Error {
        Severity::Error
    } else if marker.level == MarkerLevel::Warning {
        Severity::Warning
    } else {
        Severity::Info
    };

    CompilerMessage::new(severity, &raw_line[marker.end..]).with_location(
        Some(marker.file_path),
        marker.line_index.map(|index| index + 1),
    )
}
