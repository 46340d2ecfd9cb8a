//! Configuration read from environment variables.
//!
//! Values are resolved through a lookup function so construction can be exercised
//! without touching the process environment. Empty values count as unset.

mod sync_config;
mod venv_config;

pub use sync_config::SyncConfig;
pub use venv_config::VenvConfig;

/// Primary code base holding `modules/`.
pub const PRIMARY_BASE_VAR: &str = "CF_BASE";
/// Optional consumer repository holding its own `modules/`.
pub const SECONDARY_BASE_VAR: &str = "CF_REPO_BASE";
/// Directory below which virtual environments are created.
pub const VENV_BASE_VAR: &str = "CF_VENV_BASE";
/// Set in automated builds.
pub const CI_JOB_VAR: &str = "CF_CI_JOB";
/// Set when running as a remote batch job.
pub const REMOTE_JOB_VAR: &str = "CF_REMOTE_JOB";

pub(crate) fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

pub(crate) fn flag<F>(lookup: &F, key: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
pub(crate) fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let owned: Vec<(String, String)> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key: &str| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}
