//! cfsetup: submodule synchronization and relocatable virtual environments for
//! analysis sandboxes.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CreateVenvOptions, SyncOutcome, SyncedSubmodule, VenvOutcome, create_venv, create_venv_with,
    sync_submodules, sync_submodules_with,
};
pub use app::commands::create_venv::validate_name;
pub use domain::{
    AppError, SkipReason, SubmoduleEntry, SubmoduleState, SyncConfig, VenvConfig, VenvMode,
};
