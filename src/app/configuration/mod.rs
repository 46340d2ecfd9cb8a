mod env_reader;

pub use env_reader::{load_sync_config, load_venv_config};
