use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{AppError, MODULES_DIR, SubmoduleEntry, SubmoduleState, SyncConfig};
use crate::ports::SubmoduleInitializer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedSubmodule {
    pub entry: SubmoduleEntry,
    pub state: SubmoduleState,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub submodules: Vec<SyncedSubmodule>,
    /// Synchronization was disabled for a remote job.
    pub remote_job: bool,
    /// A secondary base was configured but is not a git working tree.
    pub secondary_skipped: bool,
}

/// Make sure every submodule below `modules/` of the configured bases is initialized.
///
/// The primary base is always walked; the secondary base only when it is a git working
/// tree. The first failing submodule aborts the walk.
pub fn execute(
    config: &SyncConfig,
    initializer: &impl SubmoduleInitializer,
) -> Result<SyncOutcome, AppError> {
    let mut outcome = SyncOutcome::default();

    if config.remote_job {
        info!("remote job, leaving submodules alone");
        outcome.remote_job = true;
        return Ok(outcome);
    }

    sync_base(&config.primary_base, initializer, &mut outcome)?;

    if let Some(secondary) = &config.secondary_base {
        if is_git_work_tree(secondary) {
            sync_base(secondary, initializer, &mut outcome)?;
        } else {
            debug!(base = %secondary.display(), "no .git marker, skipping secondary base");
            outcome.secondary_skipped = true;
        }
    }

    Ok(outcome)
}

fn sync_base(
    base: &Path,
    initializer: &impl SubmoduleInitializer,
    outcome: &mut SyncOutcome,
) -> Result<(), AppError> {
    for entry in discover_submodules(base)? {
        let state = initializer.ensure_initialized(&entry.base, &entry.relative_path)?;
        debug!(submodule = %entry.path().display(), %state, "submodule processed");
        outcome.submodules.push(SyncedSubmodule { entry, state });
    }
    Ok(())
}

/// Directories directly below `<base>/modules`, sorted by name.
///
/// Stray files are ignored. A missing `modules/` directory yields no entries.
pub fn discover_submodules(base: &Path) -> Result<Vec<SubmoduleEntry>, AppError> {
    let modules = base.join(MODULES_DIR);
    let read_dir = match fs::read_dir(&modules) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %modules.display(), "modules directory not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        if entry.path().is_dir() {
            names.push(entry.file_name());
        } else {
            debug!(path = %entry.path().display(), "ignoring non-directory entry");
        }
    }
    names.sort();

    Ok(names.into_iter().map(|name| SubmoduleEntry::new(base, name)).collect())
}

fn is_git_work_tree(base: &Path) -> bool {
    base.join(".git").exists()
}
