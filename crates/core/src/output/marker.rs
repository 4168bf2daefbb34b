use regex::Regex;
use std::sync::LazyLock;

// `[error] src/java/Foo.java:12: message`, optionally with a column and with
// anything (timestamps, workunit names) before the level tag. Paths may carry
// a drive letter; extensions start with a letter so `1.2:` is not a path.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[(?P<level>error|warn|warning|info)\]\s+(?P<path>(?:[A-Za-z]:)?[^\s:]+\.[A-Za-z][A-Za-z0-9]*)(?::(?P<line>\d+)(?::\d+)?)?:[ \t]*",
    )
    .expect("valid marker pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLevel {
    Error,
    Warning,
    Info,
}

/// A located message prefix recognized in a line of Pants output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMarker {
    pub level: MarkerLevel,
    pub file_path: String,
    /// 0-based line index, `None` when the marker carries no line
    pub line_index: Option<u32>,
    /// Byte offset where the message content starts
    pub end: usize,
}

impl OutputMarker {
    /// Parse the structured marker out of `line`, if it has one.
    ///
    /// `[info]` lines only count when they carry a line number, since plain
    /// output such as `[info] dist/app.jar: 3 entries` would
    /// otherwise be mistaken for a location.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = MARKER.captures(line)?;
        let level = match &caps["level"] {
            "error" => MarkerLevel::Error,
            "warn" | "warning" => MarkerLevel::Warning,
            _ => MarkerLevel::Info,
        };

        let line_index = match caps.name("line") {
            Some(m) => {
                let number: u32 = m.as_str().parse().ok()?;
                Some(number.saturating_sub(1))
            }
            None => None,
        };

        if level == MarkerLevel::Info && line_index.is_none() {
            return None;
        }

        Some(Self {
            level,
            file_path: caps["path"].to_string(),
            line_index,
            end: caps.get(0)?.end(),
        })
    }
}
