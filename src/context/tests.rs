// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ContextCollector;
use super::output::{to_json, write_context};
use super::record::{ContextRecord, DirectoryState, OperatingSystem, ShellInfo};
use crate::probe::os::{OsProbe, Platform};
use crate::probe::shell::ShellProbe;

fn sample_record() -> ContextRecord {
    ContextRecord {
        directory_state: DirectoryState {
            pwd: "/work/project".to_string(),
            home: "/home/dev".to_string(),
        },
        operating_system: OperatingSystem {
            platform: "Linux".to_string(),
            distribution: "TestOS".to_string(),
        },
        current_time: "2026-10-15T08:30:12.123456+00:00".to_string(),
        shell: ShellInfo::new("bash", "5.2.15"),
    }
}

#[test]
fn test_record_json_layout() {
    insta::assert_snapshot!(to_json(&sample_record(), 2).unwrap(), @r#"
    {
      "directory_state": {
        "pwd": "/work/project",
        "home": "/home/dev"
      },
      "operating_system": {
        "platform": "Linux",
        "distribution": "TestOS"
      },
      "current_time": "2026-10-15T08:30:12.123456+00:00",
      "shell": {
        "name": "bash",
        "version": "5.2.15"
      }
    }
    "#);
}

#[test]
fn test_record_json_custom_indent() {
    let json = to_json(&ShellInfo::unknown(), 4).unwrap();
    assert_eq!(
        json,
        "{\n    \"name\": \"unknown\",\n    \"version\": \"unknown\"\n}"
    );
}

#[test]
fn test_record_json_round_trip() {
    let json = to_json(&sample_record(), 2).unwrap();

    let typed: ContextRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(typed, sample_record());
    assert_eq!(to_json(&typed, 2).unwrap(), json);

    let untyped: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(to_json(&untyped, 2).unwrap(), json);
}

#[test]
fn test_write_context_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("context.json");
    std::fs::write(&path, "stale content that is longer than nothing").unwrap();

    write_context(&sample_record(), &path, 2).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_json(&sample_record(), 2).unwrap());
    assert!(!written.ends_with('\n'));
}

#[test]
fn test_write_context_reports_path() {
    let err = write_context(
        &sample_record(),
        std::path::Path::new("/nonexistent/ctxgen/context.json"),
        2,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .starts_with("failed to write '/nonexistent/ctxgen/context.json'"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_collect_has_every_field_as_string() {
    let collector = ContextCollector::new(
        OsProbe::new(Platform::Darwin, "/nonexistent/ctxgen/os-release"),
        ShellProbe::new("/nonexistent/ctxgen/bash"),
    );
    let record = collector.collect().await.unwrap();
    let value = serde_json::to_value(&record).unwrap();

    let top: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        top,
        ["directory_state", "operating_system", "current_time", "shell"]
    );
    for (section, keys) in [
        ("directory_state", &["pwd", "home"]),
        ("operating_system", &["platform", "distribution"]),
        ("shell", &["name", "version"]),
    ] {
        let object = value[section].as_object().unwrap();
        let actual: Vec<_> = object.keys().cloned().collect();
        assert_eq!(actual, keys, "keys of {section}");
        assert!(object.values().all(serde_json::Value::is_string));
    }
    assert!(value["current_time"].is_string());

    assert_eq!(record.operating_system.platform, "Darwin");
    assert_eq!(record.operating_system.distribution, "N/A");
    assert_eq!(record.shell, ShellInfo::unknown());
}

#[tokio::test]
async fn test_collect_linux_stub() {
    let release = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(release.path(), "NAME=\"TestOS\"\n").unwrap();

    let collector = ContextCollector::new(
        OsProbe::new(Platform::Linux, release.path()),
        ShellProbe::new("/nonexistent/ctxgen/tcsh"),
    );
    let record = collector.collect().await.unwrap();

    assert_eq!(record.operating_system.distribution, "TestOS");
    assert_eq!(record.shell, ShellInfo::new("tcsh", "unknown"));
}
