use std::path::Path;

use crate::domain::AppError;

pub trait PackageInstaller {
    /// Install the packages listed in `requirements` into the environment at `venv`.
    fn install(&self, venv: &Path, requirements: &Path) -> Result<(), AppError>;
}
