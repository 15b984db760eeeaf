// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operating system probe.
//!
//! ```text
//! std::env::consts::OS --> Platform
//!                            |
//!              +-------------+-------------+
//!              v                           v
//!            Linux                     everything else
//!              |                           |
//!     read /etc/os-release          distribution = "N/A"
//!     first line NAME=...
//!     strip quotes
//!              |
//!     missing / unreadable / no NAME --> "Unknown"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::context::record::{NOT_APPLICABLE, OperatingSystem, UNKNOWN_DISTRIBUTION};
use crate::error::ProbeError;

/// Key holding the distribution name in `os-release`.
const NAME_KEY: &str = "NAME";

/// Operating system family of the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
    FreeBsd,
    NetBsd,
    OpenBsd,
    DragonFly,
    Android,
    Ios,
    SunOs,
    /// Any other `std::env::consts::OS` value, kept verbatim.
    Other(String),
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "macos" => Self::Darwin,
            "windows" => Self::Windows,
            "freebsd" => Self::FreeBsd,
            "netbsd" => Self::NetBsd,
            "openbsd" => Self::OpenBsd,
            "dragonfly" => Self::DragonFly,
            "android" => Self::Android,
            "ios" => Self::Ios,
            "solaris" | "illumos" => Self::SunOs,
            other => Self::Other(other.to_string()),
        }
    }

    /// Family name as reported in the context record.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Linux => "Linux",
            Self::Darwin => "Darwin",
            Self::Windows => "Windows",
            Self::FreeBsd => "FreeBSD",
            Self::NetBsd => "NetBSD",
            Self::OpenBsd => "OpenBSD",
            Self::DragonFly => "DragonFly",
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::SunOs => "SunOS",
            Self::Other(name) => name,
        }
    }

    #[must_use]
    pub const fn is_linux(&self) -> bool {
        matches!(self, Self::Linux)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extracts the distribution name from `os-release` content.
///
/// Takes the first line starting with `NAME=`, keeps everything after the
/// first `=`, trims whitespace and surrounding double quotes. An empty value
/// counts as missing.
#[must_use]
pub fn parse_distribution(content: &str) -> Option<String> {
    let value = content.lines().find_map(|line| {
        line.strip_prefix(NAME_KEY)
            .and_then(|rest| rest.strip_prefix('='))
    })?;
    let value = value.trim().trim_matches('"');
    (!value.is_empty()).then(|| value.to_string())
}

/// Probes the platform and, on Linux, the distribution.
#[derive(Debug, Clone)]
pub struct OsProbe {
    platform: Platform,
    release_file: PathBuf,
}

impl OsProbe {
    pub fn new(platform: Platform, release_file: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            release_file: release_file.into(),
        }
    }

    /// Probes the running platform.
    pub fn current(release_file: impl Into<PathBuf>) -> Self {
        Self::new(Platform::current(), release_file)
    }

    #[must_use]
    pub const fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Runs the probe. Never fails: distribution degrades to `"Unknown"` on
    /// Linux and is `"N/A"` everywhere else.
    #[must_use]
    pub fn probe(&self) -> OperatingSystem {
        let distribution = if self.platform.is_linux() {
            read_distribution(&self.release_file).unwrap_or_else(|e| {
                debug!(error = %e, "distribution probe failed");
                UNKNOWN_DISTRIBUTION.to_string()
            })
        } else {
            NOT_APPLICABLE.to_string()
        };

        OperatingSystem {
            platform: self.platform.name().to_string(),
            distribution,
        }
    }
}

fn read_distribution(path: &Path) -> Result<String, ProbeError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProbeError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    parse_distribution(&content).ok_or_else(|| ProbeError::MissingKey {
        path: path.display().to_string(),
        key: NAME_KEY.to_string(),
    })
}
