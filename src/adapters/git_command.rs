use std::path::{Path, PathBuf};
use std::process::Command;

use super::process::run_captured;
use crate::domain::AppError;

/// Runs the `git` executable inside a repository.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args).current_dir(&self.root);
        run_captured(&mut command)
    }

    /// Check out the commit recorded for a submodule, initializing it first if needed.
    pub fn submodule_update(&self, relative_path: &Path) -> Result<(), AppError> {
        let path = relative_path.to_str().ok_or_else(|| AppError::InvalidArgument {
            name: "submodule path".to_string(),
            reason: format!("'{}' is not valid unicode", relative_path.display()),
        })?;
        self.run(&["submodule", "update", "--init", "--recursive", path])?;
        Ok(())
    }
}
