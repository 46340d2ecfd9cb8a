use std::fmt;

/// Environment names ending with this suffix are development environments.
pub const DEV_SUFFIX: &str = "_dev";

/// How a virtual environment is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvMode {
    /// Interpreter linked and the parent interpreter's site packages visible.
    Linked,
    /// Interpreter files copied; the tree is self-contained.
    Copied,
}

impl VenvMode {
    /// Development environments and CI jobs share the parent interpreter's packages,
    /// everything else gets a portable copy.
    pub fn select(name: &str, ci_job: bool) -> Self {
        if ci_job || name.ends_with(DEV_SUFFIX) { VenvMode::Linked } else { VenvMode::Copied }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VenvMode::Linked => "linked",
            VenvMode::Copied => "copied",
        }
    }
}

impl fmt::Display for VenvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
