use std::process::Command;

use tracing::debug;

use crate::domain::AppError;

/// Render a command the way a user would type it.
pub(crate) fn display_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion, returning trimmed stdout.
///
/// A non-zero exit becomes `AppError::CommandFailed` carrying the exit code and stderr.
pub(crate) fn run_captured(command: &mut Command) -> Result<String, AppError> {
    let rendered = display_command(command);
    debug!(command = %rendered, "running");

    let output = command.output().map_err(|e| AppError::CommandFailed {
        command: rendered.clone(),
        code: None,
        details: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::CommandFailed {
            command: rendered,
            code: output.status.code(),
            details: if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
