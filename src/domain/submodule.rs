use std::fmt;
use std::path::{Path, PathBuf};

/// Directory below a base path that holds the submodules.
pub const MODULES_DIR: &str = "modules";

/// A submodule located at `<base>/<relative_path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleEntry {
    pub base: PathBuf,
    pub relative_path: PathBuf,
}

impl SubmoduleEntry {
    pub fn new(base: &Path, name: impl AsRef<Path>) -> Self {
        Self { base: base.to_path_buf(), relative_path: Path::new(MODULES_DIR).join(name) }
    }

    pub fn path(&self) -> PathBuf {
        self.base.join(&self.relative_path)
    }
}

/// What the initializer did with a submodule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmoduleState {
    /// Empty checkout populated.
    Initialized,
    /// Clean detached checkout moved to the recorded commit.
    Updated,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    NotARepository,
    OnBranch,
    LocalChanges,
}

impl fmt::Display for SubmoduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmoduleState::Initialized => f.write_str("initialized"),
            SubmoduleState::Updated => f.write_str("updated"),
            SubmoduleState::Skipped(reason) => write!(f, "skipped ({reason})"),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::Missing => "path does not exist",
            SkipReason::NotARepository => "not a git repository",
            SkipReason::OnBranch => "checked out on a branch",
            SkipReason::LocalChanges => "local changes present",
        };
        f.write_str(text)
    }
}
