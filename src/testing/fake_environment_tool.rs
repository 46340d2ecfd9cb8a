use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, VenvMode};
use crate::ports::EnvironmentTool;

/// Lays out a minimal environment tree the way `venv` does.
#[derive(Default)]
pub struct FakeEnvironmentTool {
    pub created: Mutex<Vec<(PathBuf, VenvMode)>>,
    fail_code: Option<i32>,
}

impl FakeEnvironmentTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(code: i32) -> Self {
        Self { fail_code: Some(code), ..Self::default() }
    }

    pub fn created(&self) -> Vec<(PathBuf, VenvMode)> {
        self.created.lock().unwrap().clone()
    }
}

impl EnvironmentTool for FakeEnvironmentTool {
    fn create(&self, path: &Path, mode: VenvMode) -> Result<(), AppError> {
        self.created.lock().unwrap().push((path.to_path_buf(), mode));

        if let Some(code) = self.fail_code {
            return Err(AppError::CommandFailed {
                command: "python3 -m venv".into(),
                code: Some(code),
                details: "ensurepip is not available".into(),
            });
        }

        let bin = path.join("bin");
        fs::create_dir_all(&bin)?;
        fs::write(
            bin.join("activate"),
            format!(
                "deactivate nondestructive\n\nVIRTUAL_ENV=\"{}\"\nexport VIRTUAL_ENV\n\nPATH=\"$VIRTUAL_ENV/bin:$PATH\"\nexport PATH\n",
                path.display()
            ),
        )?;
        fs::write(bin.join("activate.csh"), format!("setenv VIRTUAL_ENV \"{}\"\n", path.display()))?;
        fs::write(
            bin.join("activate.fish"),
            format!("set -gx VIRTUAL_ENV \"{}\"\n", path.display()),
        )?;
        Ok(())
    }
}
