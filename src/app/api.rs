//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration loading,
//! production adapters and command execution.

use crate::adapters::{GitSubmoduleInitializer, PipInstaller, PythonVenvTool, VenvRelocator};
use crate::app::VenvContext;
use crate::app::commands::{create_venv, sync_submodules};
use crate::app::configuration::{load_sync_config, load_venv_config};
use crate::domain::{AppError, SyncConfig, VenvConfig};

pub use crate::app::commands::create_venv::{CreateVenvOptions, VenvOutcome};
pub use crate::app::commands::sync_submodules::{SyncOutcome, SyncedSubmodule};

// =============================================================================
// Submodule Synchronizer API
// =============================================================================

/// Synchronize submodules of the bases configured in the environment.
pub fn sync_submodules() -> Result<SyncOutcome, AppError> {
    sync_submodules_with(&load_sync_config()?)
}

/// Synchronize submodules of explicitly configured bases.
pub fn sync_submodules_with(config: &SyncConfig) -> Result<SyncOutcome, AppError> {
    sync_submodules::execute(config, &GitSubmoduleInitializer::new())
}

// =============================================================================
// Relocatable Environment Builder API
// =============================================================================

/// Create a relocatable environment below the base configured in the environment.
///
/// The name is validated before the configuration is read, so an empty name is
/// reported even when the environment base is unset.
pub fn create_venv(
    name: &str,
    python: &str,
    options: &CreateVenvOptions,
) -> Result<VenvOutcome, AppError> {
    create_venv::validate_name(name)?;
    create_venv_with(&load_venv_config()?, name, python, options)
}

/// Create a relocatable environment with an explicit configuration.
pub fn create_venv_with(
    config: &VenvConfig,
    name: &str,
    python: &str,
    options: &CreateVenvOptions,
) -> Result<VenvOutcome, AppError> {
    let ctx = VenvContext::new(PythonVenvTool::new(python), VenvRelocator::new(), PipInstaller::new());
    create_venv::execute(&ctx, config, name, options)
}
