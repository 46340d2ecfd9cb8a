use crate::ports::{EnvironmentTool, PackageInstaller, Relocator};

/// Collaborators used while building an environment.
pub struct VenvContext<T: EnvironmentTool, R: Relocator, I: PackageInstaller> {
    tool: T,
    relocator: R,
    installer: I,
}

impl<T: EnvironmentTool, R: Relocator, I: PackageInstaller> VenvContext<T, R, I> {
    /// Create a new environment context.
    pub fn new(tool: T, relocator: R, installer: I) -> Self {
        Self { tool, relocator, installer }
    }

    /// Get a reference to the environment creation tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Get a reference to the relocation helper.
    pub fn relocator(&self) -> &R {
        &self.relocator
    }

    /// Get a reference to the package installer.
    pub fn installer(&self) -> &I {
        &self.installer
    }
}
