// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment probes.
//!
//! ```text
//!           probe
//!             |
//!   +---------+---------+
//!   v         v         v
//! shell       os     session
//! SHELL   os-release  cwd, home
//! --version           UTC clock
//!
//! shell, os: best effort, placeholders on failure
//! session:   fatal on failure
//! ```

pub mod os;
pub mod session;
pub mod shell;
