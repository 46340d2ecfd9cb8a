use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, SubmoduleState};
use crate::ports::SubmoduleInitializer;

/// Records every call and answers with a configurable state.
#[derive(Default)]
pub struct FakeSubmoduleInitializer {
    pub calls: Mutex<Vec<(PathBuf, PathBuf)>>,
    states: HashMap<PathBuf, SubmoduleState>,
    failing: Option<PathBuf>,
}

impl FakeSubmoduleInitializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, relative_path: &str, state: SubmoduleState) -> Self {
        self.states.insert(PathBuf::from(relative_path), state);
        self
    }

    pub fn failing_on(mut self, relative_path: &str) -> Self {
        self.failing = Some(PathBuf::from(relative_path));
        self
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SubmoduleInitializer for FakeSubmoduleInitializer {
    fn ensure_initialized(
        &self,
        base: &Path,
        relative_path: &Path,
    ) -> Result<SubmoduleState, AppError> {
        self.calls.lock().unwrap().push((base.to_path_buf(), relative_path.to_path_buf()));

        if self.failing.as_deref() == Some(relative_path) {
            return Err(AppError::CommandFailed {
                command: format!(
                    "git submodule update --init --recursive {}",
                    relative_path.display()
                ),
                code: Some(128),
                details: "fatal: not a git repository".into(),
            });
        }

        Ok(self.states.get(relative_path).copied().unwrap_or(SubmoduleState::Initialized))
    }
}
