// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The execution context record.
//!
//! ```text
//! ContextRecord
//!   directory_state   { pwd, home }
//!   operating_system  { platform, distribution }
//!   current_time      "2026-10-15T08:30:12.123456+00:00"
//!   shell             { name, version }
//! ```
//!
//! Field order is the serialization order. Every leaf is a string;
//! probes that fail fill in a placeholder instead of dropping the field.

use serde::{Deserialize, Serialize};

/// Shell name or version that could not be determined.
pub const UNKNOWN: &str = "unknown";

/// Linux distribution that could not be determined.
pub const UNKNOWN_DISTRIBUTION: &str = "Unknown";

/// Distribution on platforms without one.
pub const NOT_APPLICABLE: &str = "N/A";

/// Snapshot of the local execution environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextRecord {
    pub directory_state: DirectoryState,
    pub operating_system: OperatingSystem,
    /// ISO 8601 timestamp in UTC with an explicit `+00:00` offset.
    pub current_time: String,
    pub shell: ShellInfo,
}

/// Working and home directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryState {
    pub pwd: String,
    pub home: String,
}

/// Platform family and distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatingSystem {
    pub platform: String,
    pub distribution: String,
}

/// Login shell and its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellInfo {
    pub name: String,
    pub version: String,
}

impl ShellInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The record used when any step of the shell probe fails.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN)
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN && self.version == UNKNOWN
    }
}
