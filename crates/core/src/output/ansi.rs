use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b[@-Z\\-_]").expect("valid ANSI escape pattern")
});

/// Remove terminal color and cursor escape sequences from a line of output.
pub fn strip_ansi_escapes(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}
