//! Grep-level source checks that run with the test suite.
//!
//! Each antipattern gets a line budget. New code may not add an occurrence
//! without removing one elsewhere, and a budget is only ever ratcheted down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Calls that abort the page.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Discarded results. Browser calls with no recovery path (storage writes,
// DOM class flips, cfg stand-ins) account for the allowance.
const MAX_SILENT_DISCARD: usize = 14;
const MAX_DOT_OK: usize = 9;

// Dead code must be deleted, not silenced.
const MAX_ALLOW_DEAD_CODE: usize = 0;

/// Production `.rs` files under `src/`, with `_test.rs` siblings skipped.
fn source_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

/// Counts lines containing `pattern` and fails once the budget is blown,
/// listing the offending files.
fn assert_budget(pattern: &str, max: usize) {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut hits = Vec::new();
    let mut count = 0;
    for (name, content) in &files {
        let in_file = content.lines().filter(|line| line.contains(pattern)).count();
        if in_file > 0 {
            hits.push(format!("  {name}: {in_file}"));
            count += in_file;
        }
    }
    assert!(
        count <= max,
        "{pattern} budget exceeded: found {count}, max {max}.\n{}",
        hits.join("\n")
    );
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}
