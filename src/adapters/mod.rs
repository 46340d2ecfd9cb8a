pub mod git_command;
pub mod git_submodule_initializer;
pub mod pip_installer;
pub(crate) mod process;
pub mod python_venv;
pub mod venv_relocator;

pub use git_command::GitCommandAdapter;
pub use git_submodule_initializer::GitSubmoduleInitializer;
pub use pip_installer::PipInstaller;
pub use python_venv::{DEFAULT_PYTHON, PythonVenvTool};
pub use venv_relocator::VenvRelocator;
