// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        serde_json::json!({
            "probe": {
                "default_shell": "/bin/bash",
                "os_release": "/etc/os-release"
            },
            "output": { "file": "context.json", "indent": 2 },
            "log": { "level": 2, "file_level": 5 }
        })
    );
}

#[test]
fn test_parse_empty_is_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_probe_section() {
    let config = Config::parse(
        r#"
[probe]
default_shell = "/usr/bin/zsh"
os_release = "/usr/lib/os-release"
"#,
    )
    .unwrap();
    assert_eq!(config.probe.default_shell, PathBuf::from("/usr/bin/zsh"));
    assert_eq!(config.probe.os_release, PathBuf::from("/usr/lib/os-release"));
    assert_eq!(config.output.file, PathBuf::from("context.json"));
}

#[test]
fn test_parse_log_section() {
    let config = Config::parse(
        r#"
[log]
level = 4
file = "logs/ctxgen.log"
"#,
    )
    .unwrap();
    assert_eq!(config.log.level, LogLevel::DEBUG);
    assert_eq!(config.log.file_level, LogLevel::TRACE);
    assert_eq!(config.log.file, Some(PathBuf::from("logs/ctxgen.log")));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse(
        r"
[output]
pretty = true
",
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_invalid_log_level() {
    let result = Config::parse(
        r"
[log]
level = 9
",
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_wide_indent() {
    let err = Config::parse(
        r"
[output]
indent = 12
",
    )
    .unwrap_err();
    assert!(
        err.to_string().contains("indent must be 0-8"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_overrides_beat_files() {
    let config = ConfigLoader::new()
        .add_toml_str(
            r#"
[output]
file = "from-file.json"
"#,
        )
        .set("output.file", "from-cli.json")
        .unwrap()
        .set("log.level", "5")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.output.file, PathBuf::from("from-cli.json"));
    assert_eq!(config.log.level, LogLevel::TRACE);
}

#[test]
fn test_missing_required_file_fails() {
    let result = Config::from_file("/nonexistent/ctxgen-test-config.toml");
    assert!(result.is_err());
}

#[test]
fn test_optional_file_not_listed_when_absent() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/ctxgen.toml");
    assert!(loader.loaded_files().is_empty());
    let config = loader.build().unwrap();
    assert_eq!(config, Config::default());
}
