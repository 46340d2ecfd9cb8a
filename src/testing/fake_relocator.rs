use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{PackageInstaller, Relocator};

/// Records relocation requests, optionally failing.
#[derive(Default)]
pub struct FakeRelocator {
    pub relocated: Mutex<Vec<PathBuf>>,
    fail_code: Option<i32>,
}

impl FakeRelocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(code: i32) -> Self {
        Self { fail_code: Some(code), ..Self::default() }
    }

    pub fn relocated(&self) -> Vec<PathBuf> {
        self.relocated.lock().unwrap().clone()
    }
}

impl Relocator for FakeRelocator {
    fn make_relocatable(&self, venv: &Path) -> Result<(), AppError> {
        self.relocated.lock().unwrap().push(venv.to_path_buf());
        match self.fail_code {
            Some(code) => Err(AppError::CommandFailed {
                command: "make relocatable".into(),
                code: Some(code),
                details: "relocation failed".into(),
            }),
            None => Ok(()),
        }
    }
}

/// Records requirement files handed to the installer.
#[derive(Default)]
pub struct FakeInstaller {
    pub installed: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl FakeInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn installed(&self) -> Vec<(PathBuf, PathBuf)> {
        self.installed.lock().unwrap().clone()
    }
}

impl PackageInstaller for FakeInstaller {
    fn install(&self, venv: &Path, requirements: &Path) -> Result<(), AppError> {
        self.installed.lock().unwrap().push((venv.to_path_buf(), requirements.to_path_buf()));
        Ok(())
    }
}
