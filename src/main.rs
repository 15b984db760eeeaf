// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Help? --> usage, exit
//!       |
//!       v
//!  Config --> Logging --> Mode Dispatch
//!                          Print | Save
//! ```

use std::process::ExitCode;

use ctxgen::cli::global::GlobalOptions;
use ctxgen::cli::{self, Mode};
use ctxgen::cmd::context::{run_print_command, run_save_command};
use ctxgen::cmd::help::run_help_command;
use ctxgen::config::loader::ConfigLoader;
use ctxgen::config::types::LogSettings;
use ctxgen::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use ctxgen::context::ContextCollector;
use ctxgen::logging::{LogConfig, init_logging};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.mode() == Mode::Help {
        run_help_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config.log)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    debug!(?sources, "configuration loaded");

    dispatch_mode(&cli, &config).await
}

fn build_log_config(log: &LogSettings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(log.level)
        .with_file_level(log.file_level)
        .maybe_with_log_file(log.file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_mode(cli: &cli::Cli, config: &Config) -> ExitCode {
    let collector = ContextCollector::from_config(&config.probe);

    let result = match cli.mode() {
        Mode::Print => run_print_command(&collector, &config.output).await,
        Mode::Save => run_save_command(&collector, &config.output, cli.output.as_deref())
            .await
            .map(|_| ()),
        Mode::Help => {
            run_help_command();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ctxgen::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(LOCAL_CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}
