// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! Mode --> cmd::run_* handlers
//!   Print  run_print_command
//!   Save   run_save_command
//!   Help   run_help_command
//! ```

pub mod context;
pub mod help;
