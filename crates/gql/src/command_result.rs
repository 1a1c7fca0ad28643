use std::process::ExitCode;

/// What a [`RunnableCommand`](crate::RunnableCommand) hands back to `main`
/// to print and exit with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}
impl CommandResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(message.into()),
            stdout: None,
        }
    }

    pub fn success(output: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(output.into()),
        }
    }
}
