use std::path::Path;
use std::process::Command;

use tracing::info;

use super::process::run_captured;
use crate::domain::{AppError, VenvMode};
use crate::ports::EnvironmentTool;

pub const DEFAULT_PYTHON: &str = "python3";

/// Creates environments with the standard library `venv` module.
#[derive(Debug, Clone)]
pub struct PythonVenvTool {
    python: String,
}

impl PythonVenvTool {
    pub fn new(python: impl Into<String>) -> Self {
        Self { python: python.into() }
    }

    pub(crate) fn command(&self, path: &Path, mode: VenvMode) -> Command {
        let mut command = Command::new(&self.python);
        command.args(["-m", "venv"]);
        match mode {
            VenvMode::Linked => command.args(["--symlinks", "--system-site-packages"]),
            VenvMode::Copied => command.arg("--copies"),
        };
        command.arg(path);
        command
    }
}

impl Default for PythonVenvTool {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl EnvironmentTool for PythonVenvTool {
    fn create(&self, path: &Path, mode: VenvMode) -> Result<(), AppError> {
        info!(path = %path.display(), %mode, python = %self.python, "creating virtual environment");
        run_captured(&mut self.command(path, mode))?;
        Ok(())
    }
}
