use std::path::PathBuf;

use super::{PRIMARY_BASE_VAR, REMOTE_JOB_VAR, SECONDARY_BASE_VAR, flag, non_empty};
use crate::domain::AppError;

/// Inputs of the submodule synchronizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub primary_base: PathBuf,
    pub secondary_base: Option<PathBuf>,
    pub remote_job: bool,
}

impl SyncConfig {
    pub fn new(primary_base: impl Into<PathBuf>) -> Self {
        Self { primary_base: primary_base.into(), secondary_base: None, remote_job: false }
    }

    pub fn with_secondary_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.secondary_base = Some(base.into());
        self
    }

    /// Configuration of a remote batch job, which leaves every checkout untouched.
    pub fn remote_job() -> Self {
        Self { primary_base: PathBuf::new(), secondary_base: None, remote_job: true }
    }

    /// Build the configuration, failing if the primary base is not set.
    ///
    /// Remote jobs need no bases, so the flag is read first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if flag(&lookup, REMOTE_JOB_VAR) {
            return Ok(Self::remote_job());
        }

        let primary_base = non_empty(&lookup, PRIMARY_BASE_VAR)
            .map(PathBuf::from)
            .ok_or_else(|| AppError::missing_configuration(PRIMARY_BASE_VAR))?;
        let secondary_base = non_empty(&lookup, SECONDARY_BASE_VAR).map(PathBuf::from);

        Ok(Self { primary_base, secondary_base, remote_job: false })
    }
}
