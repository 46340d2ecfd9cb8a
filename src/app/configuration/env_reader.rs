//! Configuration resolved from the process environment.

use crate::domain::{AppError, SyncConfig, VenvConfig};

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Load the submodule synchronizer configuration from the environment.
pub fn load_sync_config() -> Result<SyncConfig, AppError> {
    SyncConfig::from_lookup(process_env)
}

/// Load the environment builder configuration from the environment.
pub fn load_venv_config() -> Result<VenvConfig, AppError> {
    VenvConfig::from_lookup(process_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::{
        CI_JOB_VAR, PRIMARY_BASE_VAR, REMOTE_JOB_VAR, SECONDARY_BASE_VAR, VENV_BASE_VAR,
    };
    use serial_test::serial;
    use std::path::PathBuf;

    struct EnvVarGuard {
        key: String,
        original: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set<K: Into<String>, V: AsRef<std::ffi::OsStr>>(key: K, value: V) -> Self {
            let key = key.into();
            let original = std::env::var_os(&key);
            unsafe { std::env::set_var(&key, value) };
            Self { key, original }
        }

        fn remove<K: Into<String>>(key: K) -> Self {
            let key = key.into();
            let original = std::env::var_os(&key);
            unsafe { std::env::remove_var(&key) };
            Self { key, original }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            if let Some(original) = self.original.as_ref() {
                unsafe { std::env::set_var(&self.key, original) };
            } else {
                unsafe { std::env::remove_var(&self.key) };
            }
        }
    }

    #[test]
    #[serial]
    fn reads_sync_config_from_process_environment() {
        let _primary = EnvVarGuard::set(PRIMARY_BASE_VAR, "/opt/columnflow");
        let _secondary = EnvVarGuard::set(SECONDARY_BASE_VAR, "/opt/analysis");
        let _remote = EnvVarGuard::remove(REMOTE_JOB_VAR);

        let config = load_sync_config().expect("config should load");

        assert_eq!(config.primary_base, PathBuf::from("/opt/columnflow"));
        assert_eq!(config.secondary_base, Some(PathBuf::from("/opt/analysis")));
        assert!(!config.remote_job);
    }

    #[test]
    #[serial]
    fn unset_venv_base_fails_at_load_time() {
        let _base = EnvVarGuard::remove(VENV_BASE_VAR);
        let _ci = EnvVarGuard::set(CI_JOB_VAR, "1");

        let err = load_venv_config().expect_err("config should be rejected");

        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    #[serial]
    fn reads_ci_flag() {
        let _base = EnvVarGuard::set(VENV_BASE_VAR, "/data/venvs");
        let _ci = EnvVarGuard::set(CI_JOB_VAR, "true");

        let config = load_venv_config().expect("config should load");

        assert!(config.ci_job);
        assert_eq!(config.venv_base, PathBuf::from("/data/venvs"));
    }
}
