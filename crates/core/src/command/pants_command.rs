use std::path::{Path, PathBuf};
use std::process::Command;

/// Flag that disables colored output, passed to every Pants invocation.
pub const NO_COLORS: &str = "--no-colors";

/// A Pants invocation: the `pants` script plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantsCommand {
    pub executable: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl PantsCommand {
    /// Command for `executable`, run from the directory that contains it
    /// (the build root).
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let working_dir = executable
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf);
        Self {
            executable,
            args: Vec::new(),
            working_dir,
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_env(mut self, key: String, value: String) -> Self {
        self.env.push((key, value));
        self
    }

    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.executable.display().to_string());
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    pub fn to_process_command(&self) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }
}

/// POSIX single-quoting, only applied when `arg` would not survive the shell as-is.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%^".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_from_build_root() {
        let cmd = PantsCommand::new("/repo/pants");
        assert_eq!(cmd.working_dir, Some(PathBuf::from("/repo")));

        let bare = PantsCommand::new("pants");
        assert_eq!(bare.working_dir, None);
    }

    #[test]
    fn test_shell_rendering() {
        let cmd = PantsCommand::new("/repo/pants")
            .arg(NO_COLORS)
            .args(["compile", "src/java/my app:lib"]);
        insta::assert_snapshot!(cmd.to_shell_command(), @"/repo/pants --no-colors compile 'src/java/my app:lib'");
    }

    #[test]
    fn test_shell_rendering_escapes_metacharacters() {
        let cmd = PantsCommand::new("/r/pants").args(["it's a:b", "$HOME:x", "", "a;b"]);
        insta::assert_snapshot!(cmd.to_shell_command(), @r"/r/pants 'it'\''s a:b' '$HOME:x' '' 'a;b'");
    }

    #[test]
    fn test_process_command() {
        let cmd = PantsCommand::new("/repo/pants")
            .args(["goals"])
            .with_env("PANTS_CONFIG_FILES".to_string(), "pants.ini".to_string());
        let process = cmd.to_process_command();
        assert_eq!(process.get_program(), "/repo/pants");
        assert_eq!(process.get_args().collect::<Vec<_>>(), vec!["goals"]);
        assert_eq!(process.get_current_dir(), Some(Path::new("/repo")));
    }
}
