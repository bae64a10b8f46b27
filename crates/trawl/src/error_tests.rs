// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn io_error_includes_path_and_cause() {
    let err = Error::io(
        "/data/haystack.bin",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    let msg = err.to_string();
    assert!(msg.contains("io error"));
    assert!(msg.contains("/data/haystack.bin"));
    assert!(msg.contains("denied"));
}

#[test]
fn io_error_preserves_source() {
    use std::error::Error as _;

    let err = Error::io(
        "x",
        std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"),
    );
    let source = err.source().unwrap();
    let io = source.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn cancelled_display() {
    assert_eq!(Error::Cancelled.to_string(), "search cancelled");
}
