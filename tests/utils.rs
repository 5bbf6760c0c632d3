#![allow(dead_code)]

use genst::cli::{run, NewArgs};
use genst::types::VcsBackend;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories every generated project contains, including implied ancestors.
pub const EXPECTED_DIRS: &[&str] = &[
    ".github",
    ".github/workflows",
    "cmd",
    "cmd/server",
    "config",
    "internal",
    "internal/api",
    "internal/config",
    "internal/middleware",
    "internal/model",
    "internal/service",
    "pkg",
    "pkg/database",
    "pkg/logger",
    "scripts",
];

/// Files every generated project contains.
pub const EXPECTED_FILES: &[&str] = &[
    ".github/workflows/ci.yml",
    ".gitignore",
    "Makefile",
    "README.md",
    "cmd/server/main.go",
    "config/config.yaml",
    "go.mod",
    "internal/api/router.go",
    "internal/config/config.go",
    "pkg/database/db.go",
    "pkg/logger/logger.go",
    "scripts/start.sh",
];

pub fn new_args(project_name: &str, parent: &Path) -> NewArgs {
    NewArgs {
        project_name: project_name.to_string(),
        path: parent.to_path_buf(),
        vcs: VcsBackend::LibGit2,
    }
}

/// Runs `genst new <project_name>` inside `parent`.
pub fn generate(project_name: &str, parent: &Path) -> PathBuf {
    run(new_args(project_name, parent)).unwrap()
}

/// Splits the tree below `root` into relative directory and file paths,
/// leaving out the repository metadata directory.
pub fn list_tree(root: &Path) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut dirs = BTreeSet::new();
    let mut files = BTreeSet::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(Result::ok)
    {
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        if entry.file_type().is_dir() {
            dirs.insert(rel);
        } else {
            files.insert(rel);
        }
    }
    (dirs, files)
}

/// Whether the file at `path` has the owner-executable bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).unwrap().permissions().mode() & 0o100 != 0
}

pub fn expected_set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|p| p.to_string()).collect()
}
