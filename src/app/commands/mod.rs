pub mod create_venv;
pub mod sync_submodules;
