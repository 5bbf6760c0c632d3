use crate::error::Result;
use std::path::Path;

/// Trait for creating a local version-control repository.
pub trait RepositoryInitializer {
    /// Initializes an empty repository rooted at `project_root`.
    ///
    /// Implementations receive the target explicitly and must not change the
    /// process working directory.
    fn init_repository(&self, project_root: &Path) -> Result<()>;
}
