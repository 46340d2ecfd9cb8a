use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::AppError;
use crate::ports::Relocator;

static ABSOLUTE_SHEBANG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#!(?:/\S*)?/bin/(?P<interpreter>python[\w.-]*)[ \t]*$")
        .expect("shebang pattern is valid")
});

/// Second line of the `/bin/sh` trampoline pip writes when the interpreter path is too
/// long for a shebang. The line after it closes the python string literal.
static EXEC_TRAMPOLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^'''exec' "(?:/[^"]*)?/bin/(?P<interpreter>python[\w.-]*)" "\$0" "\$@"[ \t]*$"#)
        .expect("trampoline pattern is valid")
});

const TRAMPOLINE_SHELL: &str = "#!/bin/sh";
const TRAMPOLINE_CLOSE: &str = "' '''";

/// Strips byte-code caches and absolute interpreter shebangs from an environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct VenvRelocator;

impl VenvRelocator {
    pub fn new() -> Self {
        Self
    }

    fn remove_bytecode_caches(venv: &Path) -> Result<usize, AppError> {
        let mut caches: Vec<PathBuf> = Vec::new();
        let mut walker = WalkDir::new(venv).follow_links(false).into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| AppError::Io(e.into()))?;
            if entry.file_type().is_dir() && entry.file_name() == "__pycache__" {
                caches.push(entry.into_path());
                walker.skip_current_dir();
            }
        }

        for cache in &caches {
            fs::remove_dir_all(cache)?;
        }
        Ok(caches.len())
    }

    fn rewrite_shebangs(venv: &Path) -> Result<usize, AppError> {
        let bin = venv.join("bin");
        if !bin.is_dir() {
            return Ok(0);
        }

        let mut rewritten = 0;
        for entry in fs::read_dir(&bin)? {
            let path = entry?.path();
            let metadata = fs::symlink_metadata(&path)?;
            if !metadata.file_type().is_file() {
                continue;
            }

            let bytes = fs::read(&path)?;
            if !bytes.starts_with(b"#!") {
                continue;
            }
            let Ok(content) = String::from_utf8(bytes) else {
                continue;
            };

            if let Some(updated) = relocate_shebang(&content) {
                fs::write(&path, updated)?;
                debug!(script = %path.display(), "rewrote shebang");
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }
}

/// Replace an absolute interpreter shebang with an `env` lookup.
///
/// Shebangs passing interpreter arguments are kept, `env` would receive them as part
/// of the program name.
fn relocate_shebang(content: &str) -> Option<String> {
    let (first, rest) = split_first_line(content);
    if first == TRAMPOLINE_SHELL {
        return relocate_trampoline(rest?);
    }
    let caps = ABSOLUTE_SHEBANG.captures(first)?;

    let line = format!("#!/usr/bin/env {}", &caps["interpreter"]);
    Some(match rest {
        Some(rest) => format!("{line}\n{rest}"),
        None => line,
    })
}

/// Collapse pip's `'''exec'` trampoline into a plain `env` shebang.
fn relocate_trampoline(body: &str) -> Option<String> {
    let (exec, rest) = split_first_line(body);
    let caps = EXEC_TRAMPOLINE.captures(exec)?;
    let (close, rest) = split_first_line(rest?);
    if close != TRAMPOLINE_CLOSE {
        return None;
    }

    Some(format!("#!/usr/bin/env {}\n{}", &caps["interpreter"], rest.unwrap_or_default()))
}

fn split_first_line(content: &str) -> (&str, Option<&str>) {
    match content.split_once('\n') {
        Some((first, rest)) => (first.trim_end_matches('\r'), Some(rest)),
        None => (content.trim_end_matches('\r'), None),
    }
}

impl Relocator for VenvRelocator {
    fn make_relocatable(&self, venv: &Path) -> Result<(), AppError> {
        let caches = Self::remove_bytecode_caches(venv)?;
        let scripts = Self::rewrite_shebangs(venv)?;
        debug!(venv = %venv.display(), caches, scripts, "environment made relocatable");
        Ok(())
    }
}
