use crate::error::{Error, Result};
use crate::vcs::interface::RepositoryInitializer;
use std::path::Path;

/// Initializes repositories in-process through libgit2.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibGit2Initializer;

impl LibGit2Initializer {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryInitializer for LibGit2Initializer {
    fn init_repository(&self, project_root: &Path) -> Result<()> {
        let repo = git2::Repository::init(project_root).map_err(|e| {
            Error::RepositoryInitError {
                path: project_root.display().to_string(),
                reason: e.message().to_string(),
            }
        })?;
        log::debug!("Initialized empty Git repository in '{}'", repo.path().display());
        Ok(())
    }
}
