use std::path::Path;
use std::process::Command;

use tracing::info;

use super::process::run_captured;
use crate::domain::AppError;
use crate::ports::PackageInstaller;

/// Installs requirement files with the environment's own pip.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipInstaller;

impl PipInstaller {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn command(venv: &Path, requirements: &Path) -> Command {
        let mut command = Command::new(venv.join("bin").join("python"));
        command.args(["-m", "pip", "install", "--no-input", "-r"]).arg(requirements);
        command
    }
}

impl PackageInstaller for PipInstaller {
    fn install(&self, venv: &Path, requirements: &Path) -> Result<(), AppError> {
        info!(requirements = %requirements.display(), "installing requirements");
        run_captured(&mut Self::command(venv, requirements))?;
        Ok(())
    }
}
