/// What a command run produced: an exit code plus optional output for
/// each stream. `main` does the actual printing so commands stay
/// testable without capturing process output.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: u8,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: 1,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: 0,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    pub fn success() -> Self {
        Self {
            exit_code: 0,
            stderr: None,
            stdout: None,
        }
    }
}
