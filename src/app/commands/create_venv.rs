use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::app::VenvContext;
use crate::domain::activation::{
    ACTIVATION_SCRIPT, UNSUPPORTED_ACTIVATION_SCRIPTS, patch_activation_script,
};
use crate::domain::{AppError, RequirementsManifest, VenvConfig, VenvMode};
use crate::ports::{EnvironmentTool, PackageInstaller, Relocator};

#[derive(Debug, Clone, Default)]
pub struct CreateVenvOptions {
    /// Requirement files installed into the new environment.
    pub requirements: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvOutcome {
    pub path: PathBuf,
    pub mode: VenvMode,
    pub removed_scripts: Vec<PathBuf>,
    pub patched_assignments: usize,
    pub installed: Vec<PathBuf>,
}

/// Reject names that are empty or would escape the environment base.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::missing_argument("name"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(AppError::InvalidArgument {
            name: "name".to_string(),
            reason: format!("'{name}' must be a single directory name"),
        }),
    }
}

/// Create a relocatable virtual environment `<venv_base>/<name>`.
///
/// No cleanup happens when a step fails; the partially built environment stays on disk.
pub fn execute<T, R, I>(
    ctx: &VenvContext<T, R, I>,
    config: &VenvConfig,
    name: &str,
    options: &CreateVenvOptions,
) -> Result<VenvOutcome, AppError>
where
    T: EnvironmentTool,
    R: Relocator,
    I: PackageInstaller,
{
    validate_name(name)?;
    for requirements in &options.requirements {
        let content = fs::read_to_string(requirements)?;
        RequirementsManifest::parse(&content)?;
    }

    let path = config.venv_path(name);
    let mode = VenvMode::select(name, config.ci_job);
    info!(venv = %path.display(), %mode, "creating environment");
    ctx.tool().create(&path, mode)?;

    let bin = path.join("bin");
    let removed_scripts = remove_unsupported_scripts(&bin)?;
    let patched_assignments = make_activation_relocatable(&bin.join(ACTIVATION_SCRIPT))?;

    let mut installed = Vec::new();
    for requirements in &options.requirements {
        ctx.installer().install(&path, requirements)?;
        installed.push(requirements.clone());
    }

    ctx.relocator().make_relocatable(&path)?;

    Ok(VenvOutcome { path, mode, removed_scripts, patched_assignments, installed })
}

fn remove_unsupported_scripts(bin: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut removed = Vec::new();
    for script in UNSUPPORTED_ACTIVATION_SCRIPTS {
        let path = bin.join(script);
        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(removed)
}

fn make_activation_relocatable(script: &Path) -> Result<usize, AppError> {
    let content = fs::read_to_string(script).map_err(|e| AppError::ActivationPatch {
        path: script.to_path_buf(),
        reason: e.to_string(),
    })?;

    let patched = patch_activation_script(&content).ok_or_else(|| AppError::ActivationPatch {
        path: script.to_path_buf(),
        reason: "no VIRTUAL_ENV assignment found".to_string(),
    })?;

    fs::write(script, &patched.content)?;
    debug!(script = %script.display(), assignments = patched.assignments, "activation patched");
    Ok(patched.assignments)
}
