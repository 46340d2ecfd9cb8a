use std::path::PathBuf;

use super::{CI_JOB_VAR, VENV_BASE_VAR, flag, non_empty};
use crate::domain::AppError;

/// Inputs of the relocatable environment builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvConfig {
    pub venv_base: PathBuf,
    pub ci_job: bool,
}

impl VenvConfig {
    pub fn new(venv_base: impl Into<PathBuf>) -> Self {
        Self { venv_base: venv_base.into(), ci_job: false }
    }

    pub fn with_ci_job(mut self, ci_job: bool) -> Self {
        self.ci_job = ci_job;
        self
    }

    /// Build the configuration, failing if the environment base is not set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let venv_base = non_empty(&lookup, VENV_BASE_VAR)
            .map(PathBuf::from)
            .ok_or_else(|| AppError::missing_configuration(VENV_BASE_VAR))?;

        Ok(Self { venv_base, ci_job: flag(&lookup, CI_JOB_VAR) })
    }

    pub fn venv_path(&self, name: &str) -> PathBuf {
        self.venv_base.join(name)
    }
}
