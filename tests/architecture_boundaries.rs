use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn rel(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let rel = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();
    rel.replace('\\', "/")
}

fn sources_under(rel_dir: &str) -> Vec<PathBuf> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(rel_dir);
    if path.is_file() {
        vec![path]
    } else {
        rs_files(&path)
    }
}

#[test]
fn presentation_and_storage_do_not_query_the_os() {
    let mut violations = Vec::new();

    for dir in ["src/report", "src/store.rs", "src/format.rs"] {
        for file in sources_under(dir) {
            let content = fs::read_to_string(&file).unwrap_or_default();
            for forbidden in ["sysinfo", "crate::system::collector"] {
                if content.contains(forbidden) {
                    violations.push(format!(
                        "{} imports forbidden dependency `{}`",
                        rel(&file),
                        forbidden
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn only_the_collector_touches_sysinfo() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        if !content.contains("sysinfo::") {
            continue;
        }
        let rel_path = rel(&file);
        if rel_path != "src/system/collector.rs" {
            violations.push(format!("{rel_path} uses `sysinfo` outside the collector"));
        }
    }

    assert!(
        violations.is_empty(),
        "Unexpected sysinfo usage:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_process_exit_in_library_code() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let rel_path = rel(&file);
        if rel_path == "src/main.rs" {
            continue;
        }
        let content = fs::read_to_string(&file).unwrap_or_default();
        if content.contains("process::exit") {
            violations.push(rel_path);
        }
    }

    assert!(
        violations.is_empty(),
        "Library modules terminate the process:\n{}",
        violations.join("\n")
    );
}
