//! Relocation patch for the POSIX activation script of a virtual environment.
//!
//! `venv` writes the absolute build-time path of the environment into `bin/activate`.
//! The patch swaps that assignment for an expression which, when the script is sourced,
//! resolves the directory of the script itself and ascends one level. bash exposes the
//! sourced file as `BASH_SOURCE[0]`, zsh as the `%x` prompt expansion.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Activation scripts for shells the relocation patch does not support.
pub const UNSUPPORTED_ACTIVATION_SCRIPTS: [&str; 2] = ["activate.csh", "activate.fish"];

/// Activation script that receives the relocation patch.
pub const ACTIVATION_SCRIPT: &str = "activate";

/// Self-locating `VIRTUAL_ENV` assignment, valid under bash and zsh.
pub const SELF_LOCATING_ASSIGNMENT: &str = r#"VIRTUAL_ENV="$( cd "$( dirname "$( [ ! -z "$ZSH_VERSION" ] && echo "${(%):-%x}" || echo "${BASH_SOURCE[0]}" )" )" && dirname "$( /bin/pwd )" )""#;

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<prefix>[ \t]*(?:export[ \t]+)?)VIRTUAL_ENV=.*$")
        .expect("assignment pattern is valid")
});

/// Result of patching an activation script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedScript {
    pub content: String,
    pub assignments: usize,
}

/// Replace every `VIRTUAL_ENV=` assignment with the self-locating expression.
///
/// Indentation and a leading `export` are preserved. Returns `None` when the script
/// contains no assignment at all.
pub fn patch_activation_script(script: &str) -> Option<PatchedScript> {
    let mut assignments = 0;
    let content = ASSIGNMENT.replace_all(script, |caps: &Captures| {
        assignments += 1;
        format!("{}{}", &caps["prefix"], SELF_LOCATING_ASSIGNMENT)
    });

    if assignments == 0 {
        return None;
    }
    Some(PatchedScript { content: content.into_owned(), assignments })
}
