// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell name and version probe.
//!
//! ```text
//! $SHELL (or probe.default_shell)
//!        |
//!        v
//!   basename --> ShellKind (lookup table)
//!                 |
//!      +----------+----------+
//!      v          v          v
//!    Bash        Zsh       Other
//!      |          |          |
//!  <shell> --version      version = "unknown"
//!      |          |       (no spawn)
//!  4th token   2nd token
//!  cut at '('
//!      \          /
//!       v        v
//!   looks like a version?
//!
//! any failure --> { name: "unknown", version: "unknown" }
//! ```

use regex::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::context::record::{ShellInfo, UNKNOWN};
use crate::core::process::builder::ProcessBuilder;
use crate::error::ProbeError;

/// Environment variable holding the login shell path.
pub const SHELL_VAR: &str = "SHELL";

/// Flag passed to the shell to print its version.
const VERSION_FLAG: &str = "--version";

/// A version token starts with a digit and holds no whitespace or parentheses.
const VERSION_PATTERN: &str = r"^[0-9][0-9A-Za-z._+-]*$";

/// Shells whose version output we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
    Other,
}

/// Shell basename to kind.
const SHELL_TABLE: &[(&str, ShellKind)] = &[("bash", ShellKind::Bash), ("zsh", ShellKind::Zsh)];

type VersionParser = fn(&str) -> Option<&str>;

impl ShellKind {
    /// Looks up the kind for a shell basename.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        SHELL_TABLE
            .iter()
            .find(|(known, _)| *known == name)
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    const fn parser(self) -> Option<VersionParser> {
        match self {
            Self::Bash => Some(bash_version_token),
            Self::Zsh => Some(zsh_version_token),
            Self::Other => None,
        }
    }

    /// Whether the shell binary is invoked to find the version.
    #[must_use]
    pub const fn is_probed(self) -> bool {
        self.parser().is_some()
    }

    /// Extracts the version from `<shell> --version` output.
    ///
    /// Returns `None` for [`ShellKind::Other`] or if the output does not
    /// have the expected shape.
    #[must_use]
    pub fn parse_version(self, stdout: &str) -> Option<String> {
        let parse = self.parser()?;
        let token = parse(stdout)?;
        let regex = Regex::new(VERSION_PATTERN).ok()?;
        regex.is_match(token).then(|| token.to_string())
    }
}

/// `GNU bash, version 5.2.15(1)-release (x86_64-pc-linux-gnu)` -> `5.2.15`
fn bash_version_token(stdout: &str) -> Option<&str> {
    let token = stdout.split_whitespace().nth(3)?;
    token.split('(').next()
}

/// `zsh 5.9 (x86_64-debian-linux-gnu)` -> `5.9`
fn zsh_version_token(stdout: &str) -> Option<&str> {
    stdout.split_whitespace().nth(1)
}

/// Picks the shell path from the `SHELL` value, falling back when unset or empty.
#[must_use]
pub fn resolve_shell_path(shell_var: Option<OsString>, default_shell: &Path) -> PathBuf {
    shell_var
        .filter(|value| !value.is_empty())
        .map_or_else(|| default_shell.to_path_buf(), PathBuf::from)
}

/// Returns the final path segment of the shell path.
///
/// # Errors
///
/// Returns `ProbeError::UnexpectedOutput` if the path has no file name
/// (for example `/` or `..`).
pub fn shell_name(shell_path: &Path) -> Result<String, ProbeError> {
    shell_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ProbeError::UnexpectedOutput {
            command: SHELL_VAR.to_string(),
            output: shell_path.display().to_string(),
        })
}

/// Probes the login shell.
#[derive(Debug, Clone)]
pub struct ShellProbe {
    shell_path: PathBuf,
}

impl ShellProbe {
    pub fn new(shell_path: impl Into<PathBuf>) -> Self {
        Self {
            shell_path: shell_path.into(),
        }
    }

    /// Reads `SHELL` from the process environment.
    #[must_use]
    pub fn from_env(default_shell: &Path) -> Self {
        Self::new(resolve_shell_path(std::env::var_os(SHELL_VAR), default_shell))
    }

    #[must_use]
    pub fn shell_path(&self) -> &Path {
        &self.shell_path
    }

    /// Runs the probe. Never fails: any error yields [`ShellInfo::unknown`].
    pub async fn probe(&self) -> ShellInfo {
        match self.try_probe().await {
            Ok(info) => info,
            Err(e) => {
                debug!(shell = %self.shell_path.display(), error = %e, "shell probe failed");
                ShellInfo::unknown()
            }
        }
    }

    async fn try_probe(&self) -> Result<ShellInfo, ProbeError> {
        let name = shell_name(&self.shell_path)?;
        let kind = ShellKind::from_name(&name);
        if !kind.is_probed() {
            debug!(shell = %name, "no version rule for shell");
            return Ok(ShellInfo::new(name, UNKNOWN));
        }

        let output = ProcessBuilder::resolve(&self.shell_path)?
            .arg(VERSION_FLAG)
            .name(name.as_str())
            .run()
            .await?;

        let version = kind
            .parse_version(output.stdout())
            .ok_or_else(|| ProbeError::UnexpectedOutput {
                command: format!("{name} {VERSION_FLAG}"),
                output: output.stdout().trim().to_string(),
            })?;

        Ok(ShellInfo::new(name, version))
    }
}

#[cfg(test)]
mod tests;
