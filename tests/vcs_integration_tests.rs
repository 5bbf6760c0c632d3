use genst::error::Error;
use genst::vcs::command::GitCommandInitializer;
use genst::vcs::libgit2::LibGit2Initializer;
use genst::vcs::RepositoryInitializer;
use std::path::Path;
use tempfile::TempDir;
use test_log::test;

/// Runs `initializer` on `root` and asserts the working directory is the
/// same afterwards, whatever the outcome.
fn init_keeping_cwd(
    initializer: &dyn RepositoryInitializer,
    root: &Path,
) -> genst::error::Result<()> {
    let before = std::env::current_dir().unwrap();
    let result = initializer.init_repository(root);
    assert_eq!(std::env::current_dir().unwrap(), before);
    result
}

#[test]
fn libgit2_success_keeps_working_directory() {
    let tmp = TempDir::new().unwrap();
    init_keeping_cwd(&LibGit2Initializer::new(), tmp.path()).unwrap();
    assert!(tmp.path().join(".git").is_dir());
}

#[test]
fn libgit2_failure_keeps_working_directory() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("file");
    std::fs::write(&file, "").unwrap();

    let err = init_keeping_cwd(&LibGit2Initializer::new(), &file).unwrap_err();
    assert!(matches!(err, Error::RepositoryInitError { .. }));
}

#[test]
fn unavailable_command_keeps_working_directory() {
    let tmp = TempDir::new().unwrap();
    let initializer = GitCommandInitializer::with_program("genst-missing-git");

    let err = init_keeping_cwd(&initializer, tmp.path()).unwrap_err();
    assert!(matches!(err, Error::RepositoryInitError { .. }));
    assert!(!tmp.path().join(".git").exists());
}

#[test]
fn git_command_initializes_when_git_is_installed() {
    let tmp = TempDir::new().unwrap();
    let has_git = std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success());
    if !has_git {
        log::warn!("git executable not found, skipping");
        return;
    }

    init_keeping_cwd(&GitCommandInitializer::new(), tmp.path()).unwrap();
    assert!(tmp.path().join(".git").is_dir());
}
