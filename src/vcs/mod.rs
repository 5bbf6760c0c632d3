use crate::types::VcsBackend;
use crate::vcs::{command::GitCommandInitializer, libgit2::LibGit2Initializer};

pub mod command;
pub mod interface;
pub mod libgit2;

pub use interface::RepositoryInitializer;

/// Returns the repository initializer implementing `backend`.
pub fn get_initializer(backend: VcsBackend) -> Box<dyn RepositoryInitializer> {
    match backend {
        VcsBackend::LibGit2 => Box::new(LibGit2Initializer::new()),
        VcsBackend::Git => Box::new(GitCommandInitializer::new()),
    }
}
