//! Hygiene — enforces coding standards at test time
//!
//! Scans the widget crate's `src/` for constructs that crash the page or
//! swallow errors. Each has a budget. Browser glue discards some `web-sys`
//! results (focus, class toggles, logger init); those are counted, and the
//! budget only ever shrinks.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, budget, and a short label for the failure message.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics — these take down every widget on the page.
    (".unwrap()", 0, "unwrap"),
    (".expect(", 0, "expect"),
    ("panic!(", 0, "panic"),
    ("unreachable!(", 0, "unreachable"),
    ("todo!(", 0, "todo"),
    ("unimplemented!(", 0, "unimplemented"),
    // Silent loss — discards results without inspecting.
    ("let _ =", 14, "silent discard"),
    (".ok()", 7, "dot ok"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "allow(dead_code)"),
];

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], matches: impl Fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| matches(line)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, max, label) in BUDGETS {
        let found = hits(&files, |line| line.contains(pattern));
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > max {
            failures.push(format!("{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn endpoint_routes_live_in_config() {
    let files: Vec<_> = source_files()
        .into_iter()
        .filter(|f| !f.path.ends_with("config.rs"))
        .collect();
    let found = hits(&files, |line| line.contains("\"/api/"));
    assert!(
        found.is_empty(),
        "hard-coded endpoint routes outside config.rs:\n{}",
        format_hits(&found)
    );
}
