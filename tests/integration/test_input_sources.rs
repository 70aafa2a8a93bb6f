//! Integration tests for running several input sources

#[path = "../test_utils/mod.rs"]
mod test_utils;

use center::{run, InputSource};
use std::fs;
use tempfile::TempDir;
use test_utils::*;

#[test]
fn test_files_processed_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "one\n").unwrap();
    fs::write(&second, "two\nthree\n").unwrap();

    let sources = InputSource::from_args([&first, &second]);
    let mut out = Vec::new();
    let summary = run(&sources, &per_line_config(11), &mut out, |_| {}).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "    one\n    two\n   three\n"
    );
    assert!(summary.is_success());
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.lines, 3);
}

#[test]
fn test_block_margin_is_per_source() {
    let dir = TempDir::new().unwrap();
    let narrow = dir.path().join("narrow.txt");
    let wide = dir.path().join("wide.txt");
    fs::write(&narrow, "a\nbb\n").unwrap();
    fs::write(&wide, "a\nbbbbbb\n").unwrap();

    let sources = vec![InputSource::File(narrow), InputSource::File(wide)];
    let mut out = Vec::new();
    run(&sources, &block_config(10), &mut out, |_| {}).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "    a\n    bb\n  a\n  bbbbbb\n"
    );
}

#[test]
fn test_file_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.txt");
    fs::write(&path, "end").unwrap();

    let mut out = Vec::new();
    run(&[InputSource::File(path)], &per_line_config(7), &mut out, |_| {}).unwrap();
    assert_eq!(out, b"  end");
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, [b'c', b'a', b'f', 0xe9, b'\n']).unwrap();

    let mut out = Vec::new();
    run(&[InputSource::File(path)], &per_line_config(8), &mut out, |_| {}).unwrap();
    assert_eq!(out, [b' ', b' ', b'c', b'a', b'f', 0xe9, b'\n']);
}
