//! Shared testing utilities for cfsetup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the tools, cleared for every invocation.
const CF_VARIABLES: [&str; 5] =
    ["CF_BASE", "CF_REPO_BASE", "CF_VENV_BASE", "CF_CI_JOB", "CF_REMOTE_JOB"];

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory used for fixtures and CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for one of the compiled binaries with a clean `CF_*` environment.
    pub fn cli(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Failed to locate binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home());
        for variable in CF_VARIABLES {
            cmd.env_remove(variable);
        }
        allow_file_protocol(&mut cmd);
        cmd
    }

    /// Run git in `dir` and assert success, returning stdout.
    pub fn git(&self, dir: &Path, args: &[&str]) -> String {
        let mut cmd = std::process::Command::new("git");
        cmd.args(args).current_dir(dir).env("HOME", self.home());
        cmd.env("GIT_CONFIG_COUNT", "1")
            .env("GIT_CONFIG_KEY_0", "protocol.file.allow")
            .env("GIT_CONFIG_VALUE_0", "always");
        let output = cmd.output().expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Initialize a repository with one commit on `main`.
    pub fn init_repo(&self, dir: &Path) {
        fs::create_dir_all(dir).expect("Failed to create repository directory");
        self.git(dir, &["init", "--initial-branch=main"]);
        self.git(dir, &["config", "user.name", "Test User"]);
        self.git(dir, &["config", "user.email", "test@example.com"]);
        fs::write(dir.join("README.md"), "fixture\n").expect("Failed to write README");
        self.git(dir, &["add", "README.md"]);
        self.git(dir, &["commit", "-m", "initial"]);
    }

    /// Create a repository at `work/<name>` whose `modules/` holds one registered but
    /// uninitialized submodule per entry of `submodules`.
    pub fn repo_with_submodules(&self, name: &str, submodules: &[&str]) -> PathBuf {
        let base = self.work_dir.join(name);
        self.init_repo(&base);

        for submodule in submodules {
            let upstream = self.work_dir.join("upstream").join(submodule);
            self.init_repo(&upstream);
            let upstream = upstream.to_str().expect("utf-8 path").to_string();
            let relative = format!("modules/{submodule}");
            self.git(&base, &["submodule", "add", &upstream, &relative]);
        }
        self.git(&base, &["commit", "-m", "add submodules"]);

        for submodule in submodules {
            self.git(&base, &["submodule", "deinit", "-f", &format!("modules/{submodule}")]);
        }
        base
    }

    /// Assert that a submodule checkout below `base` is populated.
    pub fn assert_submodule_populated(&self, base: &Path, submodule: &str) {
        let readme = base.join("modules").join(submodule).join("README.md");
        assert!(readme.exists(), "submodule {} should be checked out", submodule);
    }

    /// Assert that a submodule directory below `base` is still empty.
    pub fn assert_submodule_empty(&self, base: &Path, submodule: &str) {
        let dir = base.join("modules").join(submodule);
        let entries = fs::read_dir(&dir).expect("submodule directory should exist").count();
        assert_eq!(entries, 0, "submodule {} should be empty", submodule);
    }
}

/// Recent git refuses local `file` transport for submodules unless allowed.
fn allow_file_protocol(cmd: &mut Command) {
    cmd.env("GIT_CONFIG_COUNT", "1")
        .env("GIT_CONFIG_KEY_0", "protocol.file.allow")
        .env("GIT_CONFIG_VALUE_0", "always");
}
