use std::path::Path;

use crate::domain::{AppError, VenvMode};

pub trait EnvironmentTool {
    /// Create a virtual environment at `path`.
    fn create(&self, path: &Path, mode: VenvMode) -> Result<(), AppError>;
}
