use std::fs;
use std::path::Path;

use git2::{ErrorCode, Repository, StatusOptions};
use tracing::{debug, info};

use super::git_command::GitCommandAdapter;
use crate::domain::{AppError, SkipReason, SubmoduleState};
use crate::ports::SubmoduleInitializer;

/// Initializes empty submodule checkouts and refreshes clean detached ones.
///
/// A submodule checked out on a branch or carrying local changes is never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitSubmoduleInitializer;

impl GitSubmoduleInitializer {
    pub fn new() -> Self {
        Self
    }

    fn inspect(path: &Path) -> Result<Option<SkipReason>, AppError> {
        let repo = match Repository::open(path) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Ok(Some(SkipReason::NotARepository));
            }
            Err(e) => return Err(e.into()),
        };

        if !repo.head_detached()? {
            return Ok(Some(SkipReason::OnBranch));
        }

        let mut options = StatusOptions::new();
        options.include_untracked(true).include_ignored(false).recurse_untracked_dirs(false);
        if !repo.statuses(Some(&mut options))?.is_empty() {
            return Ok(Some(SkipReason::LocalChanges));
        }

        Ok(None)
    }
}

impl SubmoduleInitializer for GitSubmoduleInitializer {
    fn ensure_initialized(
        &self,
        base: &Path,
        relative_path: &Path,
    ) -> Result<SubmoduleState, AppError> {
        let path = base.join(relative_path);
        if !path.exists() {
            return Ok(SubmoduleState::Skipped(SkipReason::Missing));
        }

        let git = GitCommandAdapter::new(base.to_path_buf());

        if fs::read_dir(&path)?.next().is_none() {
            info!(submodule = %relative_path.display(), "initializing empty submodule");
            git.submodule_update(relative_path)?;
            return Ok(SubmoduleState::Initialized);
        }

        if let Some(reason) = Self::inspect(&path)? {
            debug!(submodule = %relative_path.display(), %reason, "leaving submodule untouched");
            return Ok(SubmoduleState::Skipped(reason));
        }

        info!(submodule = %relative_path.display(), "updating submodule");
        git.submodule_update(relative_path)?;
        Ok(SubmoduleState::Updated)
    }
}
