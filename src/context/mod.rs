// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Context assembly.
//!
//! ```text
//! ContextCollector::from_config(&ProbeConfig)
//!        |
//!        v
//!   collect()
//!     session::directory_state()   (fatal)
//!     OsProbe::probe()             (best effort)
//!     session::current_time()
//!     ShellProbe::probe().await    (best effort)
//!        |
//!        v
//!   ContextRecord --> output::to_json / output::write_context
//! ```

pub mod output;
pub mod record;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::config::types::ProbeConfig;
use crate::error::Result;
use crate::probe::os::OsProbe;
use crate::probe::session;
use crate::probe::shell::ShellProbe;

use record::ContextRecord;

/// Runs the probes and assembles a [`ContextRecord`].
#[derive(Debug, Clone)]
pub struct ContextCollector {
    os: OsProbe,
    shell: ShellProbe,
}

impl ContextCollector {
    #[must_use]
    pub const fn new(os: OsProbe, shell: ShellProbe) -> Self {
        Self { os, shell }
    }

    /// Probes the running host, reading `SHELL` from the environment.
    #[must_use]
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(
            OsProbe::current(&config.os_release),
            ShellProbe::from_env(&config.default_shell),
        )
    }

    /// Collects a fresh record.
    ///
    /// # Errors
    ///
    /// Returns an error if the working or home directory cannot be determined.
    /// Shell and OS failures never surface here; they become placeholders.
    pub async fn collect(&self) -> Result<ContextRecord> {
        let directory_state = session::directory_state()?;
        let operating_system = self.os.probe();
        let current_time = session::current_time();
        let shell = self.shell.probe().await;

        debug!(
            platform = %operating_system.platform,
            distribution = %operating_system.distribution,
            shell = %shell.name,
            version = %shell.version,
            "context collected"
        );

        Ok(ContextRecord {
            directory_state,
            operating_system,
            current_time,
            shell,
        })
    }
}
