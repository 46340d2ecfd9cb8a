use std::path::Path;

use crate::domain::{AppError, SubmoduleState};

pub trait SubmoduleInitializer {
    /// Make sure the submodule at `relative_path` inside the repository at `base` is
    /// initialized. Submodules with local changes must be left untouched.
    fn ensure_initialized(
        &self,
        base: &Path,
        relative_path: &Path,
    ) -> Result<SubmoduleState, AppError>;
}
