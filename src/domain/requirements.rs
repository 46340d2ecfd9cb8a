//! Requirements manifest parsing.
//!
//! Manifests are flat pip requirement files: one named requirement per line with
//! optional version specifiers and environment marker, or a package pulled from a
//! version-control URL.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::AppError;

static NAMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?P<extras>\[[A-Za-z0-9._,\s-]*\])?\s*(?P<specifiers>(?:===|~=|==|>=|<=|!=|>|<)\s*[A-Za-z0-9.*+!_-]+(?:\s*,\s*(?:===|~=|==|>=|<=|!=|>|<)\s*[A-Za-z0-9.*+!_-]+)*)?\s*(?:;\s*(?P<marker>\S.*))?$",
    )
    .expect("requirement pattern is valid")
});

static SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<op>===|~=|==|>=|<=|!=|>|<)\s*(?P<version>[A-Za-z0-9.*+!_-]+)")
        .expect("specifier pattern is valid")
});

static DIRECT_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*@\s*(?P<url>\S+)$")
        .expect("direct reference pattern is valid")
});

/// One entry of a requirements manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Package resolved from an index, optionally constrained and guarded by an
    /// environment marker such as `python_version < "3.11"`.
    Named { name: String, constraints: Vec<VersionConstraint>, marker: Option<String> },
    /// Package installed straight from a version-control repository.
    Vcs { name: Option<String>, url: Url },
}

impl Requirement {
    pub fn name(&self) -> Option<&str> {
        match self {
            Requirement::Named { name, .. } => Some(name),
            Requirement::Vcs { name, .. } => name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub operator: String,
    pub version: String,
}

/// Parsed requirements file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementsManifest {
    pub requirements: Vec<Requirement>,
}

impl RequirementsManifest {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let mut requirements = Vec::new();
        for (index, raw) in content.lines().enumerate() {
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }
            requirements.push(parse_line(line, index + 1)?);
        }
        Ok(Self { requirements })
    }

    pub fn vcs_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|r| matches!(r, Requirement::Vcs { .. }))
    }
}

/// Drop a `#` comment unless the hash belongs to a URL fragment.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    match line.find(" #").or_else(|| line.find("\t#")) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_line(line: &str, number: usize) -> Result<Requirement, AppError> {
    if line.starts_with('-') {
        return Err(AppError::InvalidRequirement {
            line: number,
            reason: format!("pip options are not supported in manifests: '{line}'"),
        });
    }

    if line.starts_with("git+") {
        let url = parse_vcs_url(line, number)?;
        let name = egg_name(&url);
        return Ok(Requirement::Vcs { name, url });
    }

    if let Some(caps) = DIRECT_REFERENCE.captures(line) {
        let url = parse_vcs_url(&caps["url"], number)?;
        return Ok(Requirement::Vcs { name: Some(caps["name"].to_string()), url });
    }

    let caps = NAMED.captures(line).ok_or_else(|| AppError::InvalidRequirement {
        line: number,
        reason: format!("cannot parse '{line}'"),
    })?;
    let constraints = caps
        .name("specifiers")
        .map(|specifiers| {
            SPECIFIER
                .captures_iter(specifiers.as_str())
                .map(|spec| VersionConstraint {
                    operator: spec["op"].to_string(),
                    version: spec["version"].to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    let marker = caps.name("marker").map(|m| m.as_str().trim().to_string());
    Ok(Requirement::Named { name: caps["name"].to_string(), constraints, marker })
}

fn parse_vcs_url(raw: &str, number: usize) -> Result<Url, AppError> {
    let Some(stripped) = raw.strip_prefix("git+") else {
        return Err(AppError::InvalidRequirement {
            line: number,
            reason: format!("only git+ URLs are supported, got '{raw}'"),
        });
    };
    let url = Url::parse(stripped).map_err(|e| AppError::InvalidRequirement {
        line: number,
        reason: format!("invalid repository URL '{stripped}': {e}"),
    })?;
    if !url.has_host() && url.scheme() != "file" {
        return Err(AppError::InvalidRequirement {
            line: number,
            reason: format!("repository URL '{stripped}' has no host"),
        });
    }
    Ok(url)
}

fn egg_name(url: &Url) -> Option<String> {
    url.fragment()?
        .split('&')
        .find_map(|pair| pair.strip_prefix("egg="))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
