//! Hygiene: production sources must not contain panicking shortcuts.
//!
//! The UI promises that no backend or browser failure takes the page down, so
//! every error path has to be folded into state instead of unwinding. Each
//! pattern below has a budget of zero in `client/src/` (test files excluded).

use std::fs;
use std::path::Path;

const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "unwrap"),
    (".expect(", "expect"),
    ("panic!(", "panic"),
    ("unreachable!(", "unreachable"),
    ("todo!(", "todo"),
    ("unimplemented!(", "unimplemented"),
    ("#[allow(dead_code)]", "allow(dead_code)"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

#[test]
fn scans_some_sources() {
    assert!(!source_files().is_empty(), "no sources found under src/");
}

#[test]
fn no_panicking_shortcuts_in_production_code() {
    let files = source_files();
    let mut violations = Vec::new();
    for (pattern, name) in FORBIDDEN {
        for file in &files {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 {
                violations.push(format!("  {name}: {} ({count})", file.path));
            }
        }
    }
    assert!(violations.is_empty(), "forbidden patterns found:\n{}", violations.join("\n"));
}
