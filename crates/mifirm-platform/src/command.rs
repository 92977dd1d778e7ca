use std::ffi::OsStr;
use std::process::{Child, Command as StdCommand, Stdio};

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    pub fn program(&self) -> &str { &self.program }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    /// Detach from the terminal so the child cannot write over prompts.
    pub fn quiet(mut self) -> Self {
        self.inner
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        self
    }

    pub fn get_args(&self) -> Vec<String> {
        self.inner
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    pub fn spawn(&mut self) -> Result<Child> {
        self.inner.spawn().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_new() {
        let cmd = Command::new("xdg-open");
        assert_eq!(cmd.program(), "xdg-open");
    }

    #[test]
    fn test_command_args() {
        let cmd = Command::new("xdg-open").args(["--", "https://example.com"]).arg("-x");
        assert_eq!(cmd.get_args(), ["--", "https://example.com", "-x"]);
    }

    #[test]
    fn test_command_spawn_missing_program() {
        let mut cmd = Command::new("mifirm_missing_binary_12345").quiet();
        let err = cmd.spawn().unwrap_err();
        assert!(matches!(err, Error::CommandFailed { ref cmd, .. } if cmd == "mifirm_missing_binary_12345"));
    }
}
