use std::path::Path;

use crate::domain::AppError;

pub trait Relocator {
    /// Remove remaining absolute-path dependencies from the environment at `venv`.
    fn make_relocatable(&self, venv: &Path) -> Result<(), AppError>;
}
