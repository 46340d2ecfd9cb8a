mod environment_tool;
mod package_installer;
mod relocator;
mod submodule_initializer;

pub use environment_tool::EnvironmentTool;
pub use package_installer::PackageInstaller;
pub use relocator::Relocator;
pub use submodule_initializer::SubmoduleInitializer;
