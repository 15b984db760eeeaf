// ctxgen: Execution Context Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{current_time, directory_state, format_timestamp};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::path::Path;

#[test]
fn test_format_timestamp() {
    let instant = Utc.with_ymd_and_hms(2026, 10, 15, 8, 30, 12).unwrap();
    insta::assert_snapshot!(format_timestamp(instant), @"2026-10-15T08:30:12.000000+00:00");
}

#[test]
fn test_current_time_is_utc_and_recent() {
    let before = Utc::now();
    let stamp = current_time();
    let after = Utc::now();

    assert!(stamp.ends_with("+00:00"), "missing UTC offset: {stamp}");
    let parsed = DateTime::parse_from_rfc3339(&stamp)
        .unwrap()
        .with_timezone(&Utc);
    // Microsecond truncation can put the stamp just before `before`.
    assert!(parsed >= before - TimeDelta::milliseconds(1));
    assert!(parsed <= after);
}

#[test]
fn test_directory_state_is_absolute() {
    let state = directory_state().expect("cwd and home should be available in tests");
    assert!(Path::new(&state.pwd).is_absolute(), "pwd: {}", state.pwd);
    assert!(Path::new(&state.home).is_absolute(), "home: {}", state.home);
    assert_eq!(
        Path::new(&state.pwd),
        std::env::current_dir().unwrap().as_path()
    );
}
