mod fake_environment_tool;
mod fake_relocator;
mod fake_submodule_initializer;

pub use fake_environment_tool::FakeEnvironmentTool;
pub use fake_relocator::{FakeInstaller, FakeRelocator};
pub use fake_submodule_initializer::FakeSubmoduleInitializer;
