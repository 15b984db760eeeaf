// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ShellKind, ShellProbe, resolve_shell_path, shell_name};
use crate::context::record::ShellInfo;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const BASH_OUTPUT: &str = "GNU bash, version 5.2.15(1)-release (x86_64-pc-linux-gnu)\n\
Copyright (C) 2022 Free Software Foundation, Inc.\n";

const ZSH_OUTPUT: &str = "zsh 5.9 (x86_64-debian-linux-gnu)\n";

/// Writes an executable script named `name` that prints `stdout` and exits with `code`.
///
/// Returns once the script can be exec'd. A child forked by another test
/// thread may still hold the write descriptor, which makes exec fail with
/// `ExecutableFileBusy` until that child reaches its own exec.
#[cfg(unix)]
fn fake_shell(dir: &Path, name: &str, stdout: &str, code: i32) -> PathBuf {
    use std::io::ErrorKind;
    use std::os::unix::fs::PermissionsExt;
    use std::time::Duration;

    let path = dir.join(name);
    let script = format!("#!/bin/sh\ncat <<'EOF'\n{stdout}\nEOF\nexit {code}\n");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    for _ in 0..100 {
        match std::process::Command::new(&path).output() {
            Err(e) if e.kind() == ErrorKind::ExecutableFileBusy => {
                std::thread::sleep(Duration::from_millis(10));
            }
            Ok(_) => return path,
            Err(e) => panic!("fake shell {} cannot run: {e}", path.display()),
        }
    }
    panic!("fake shell {} stayed busy", path.display());
}

#[test]
fn test_shell_kind_lookup() {
    assert_eq!(ShellKind::from_name("bash"), ShellKind::Bash);
    assert_eq!(ShellKind::from_name("zsh"), ShellKind::Zsh);
    assert_eq!(ShellKind::from_name("fish"), ShellKind::Other);
    assert_eq!(ShellKind::from_name("Bash"), ShellKind::Other);
    assert!(!ShellKind::Other.is_probed());
}

#[test]
fn test_parse_bash_version() {
    assert_eq!(
        ShellKind::Bash.parse_version(BASH_OUTPUT).as_deref(),
        Some("5.2.15")
    );
    assert_eq!(
        ShellKind::Bash
            .parse_version("GNU bash, version 3.2.57(1)-release (arm64-apple-darwin23)")
            .as_deref(),
        Some("3.2.57")
    );
}

#[test]
fn test_parse_zsh_version() {
    assert_eq!(
        ShellKind::Zsh.parse_version(ZSH_OUTPUT).as_deref(),
        Some("5.9")
    );
    assert_eq!(
        ShellKind::Zsh
            .parse_version("zsh 5.8.1 (x86_64-apple-darwin22.0)")
            .as_deref(),
        Some("5.8.1")
    );
}

#[test]
fn test_parse_rejects_unexpected_output() {
    assert_eq!(ShellKind::Bash.parse_version(""), None);
    assert_eq!(ShellKind::Bash.parse_version("bash: too short"), None);
    assert_eq!(
        ShellKind::Bash.parse_version("some other program output here"),
        None
    );
    assert_eq!(ShellKind::Zsh.parse_version("zsh"), None);
    assert_eq!(ShellKind::Zsh.parse_version("zsh (beta)"), None);
    assert_eq!(ShellKind::Other.parse_version(BASH_OUTPUT), None);
}

#[test]
fn test_resolve_shell_path_default_when_unset() {
    let path = resolve_shell_path(None, Path::new("/bin/bash"));
    assert_eq!(path, PathBuf::from("/bin/bash"));
    assert_eq!(shell_name(&path).unwrap(), "bash");
}

#[test]
fn test_resolve_shell_path_default_when_empty() {
    let path = resolve_shell_path(Some(OsString::new()), Path::new("/bin/bash"));
    assert_eq!(path, PathBuf::from("/bin/bash"));
}

#[test]
fn test_resolve_shell_path_from_var() {
    let path = resolve_shell_path(Some(OsString::from("/usr/bin/zsh")), Path::new("/bin/bash"));
    assert_eq!(shell_name(&path).unwrap(), "zsh");
}

#[test]
fn test_shell_name_requires_file_name() {
    assert!(shell_name(Path::new("/")).is_err());
    assert!(shell_name(Path::new("..")).is_err());
}

#[tokio::test]
async fn test_missing_binary_degrades_whole_record() {
    let info = ShellProbe::new("/nonexistent/ctxgen/bash").probe().await;
    assert_eq!(info, ShellInfo::unknown());
    assert!(info.is_unknown());
}

#[tokio::test]
async fn test_unrecognized_shell_is_not_spawned() {
    // The binary does not exist, so a spawn attempt would degrade the name too.
    let info = ShellProbe::new("/nonexistent/ctxgen/fish").probe().await;
    assert_eq!(info, ShellInfo::new("fish", "unknown"));
}

#[tokio::test]
async fn test_unnamed_shell_path_degrades() {
    let info = ShellProbe::new("/").probe().await;
    assert!(info.is_unknown());
}

#[cfg(unix)]
#[tokio::test]
async fn test_fake_bash_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = fake_shell(dir.path(), "bash", BASH_OUTPUT.trim_end(), 0);

    let info = ShellProbe::new(path).probe().await;
    assert_eq!(info, ShellInfo::new("bash", "5.2.15"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_fake_zsh_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = fake_shell(dir.path(), "zsh", ZSH_OUTPUT.trim_end(), 0);

    let info = ShellProbe::new(path).probe().await;
    assert_eq!(info, ShellInfo::new("zsh", "5.9"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_zero_exit_degrades_whole_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = fake_shell(dir.path(), "bash", BASH_OUTPUT.trim_end(), 1);

    let info = ShellProbe::new(path).probe().await;
    assert_eq!(info, ShellInfo::unknown());
}

#[cfg(unix)]
#[tokio::test]
async fn test_garbled_output_degrades_whole_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = fake_shell(dir.path(), "zsh", "usage: something else entirely", 0);

    let info = ShellProbe::new(path).probe().await;
    assert_eq!(info, ShellInfo::unknown());
}

#[cfg(unix)]
#[tokio::test]
async fn test_real_shell_when_available() {
    let bash = Path::new("/bin/bash");
    if !bash.exists() {
        return;
    }
    let info = ShellProbe::new(bash).probe().await;
    assert_eq!(info.name, "bash");
    assert!(
        info.version.starts_with(|c: char| c.is_ascii_digit()),
        "unexpected bash version: {info:?}"
    );
}
