// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                   main.rs
//!                      |
//!            +---------+---------+
//!            v                   v
//!       cli (clap)         cmd (handlers)
//!      Print/Save/Help    print / save / help
//!            |                   |
//!            +---------+---------+
//!                      v
//!        ,---------------------------,
//!        |          config           |
//!        |   TOML, CTXGEN_*, flags   |
//!        '-------------+-------------'
//!                      v
//!                   context
//!          ContextCollector, record, JSON
//!                      |
//!          +-----------+-----------+
//!          v           v           v
//!   probe::shell   probe::os   probe::session
//!
//!   +-----------------------------------------+
//!   |  core          process spawning         |
//!   +-----------------------------------------+
//!   |  foundation    error, logging           |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod logging;
pub mod probe;
