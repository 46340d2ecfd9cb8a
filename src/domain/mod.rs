pub mod activation;
pub mod configuration;
pub mod error;
pub mod requirements;
pub mod submodule;
pub mod venv_mode;

pub use configuration::{SyncConfig, VenvConfig};
pub use error::AppError;
pub use requirements::{Requirement, RequirementsManifest, VersionConstraint};
pub use submodule::{MODULES_DIR, SkipReason, SubmoduleEntry, SubmoduleState};
pub use venv_mode::{DEV_SUFFIX, VenvMode};
