// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules shared by the probes.
//!
//! ```text
//!      core
//!       |
//!       v
//!    process
//!       |
//!  ProcessBuilder
//!  ProcessOutput
//! ```

pub mod process;
