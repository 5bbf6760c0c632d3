use crate::constants::GIT_PROGRAM;
use crate::error::{Error, Result};
use crate::vcs::interface::RepositoryInitializer;
use std::path::Path;
use std::process::{Command, Stdio};

/// Initializes repositories by running `git init` as a child process.
///
/// The child is started with the project root as its working directory, so
/// the working directory of this process is left untouched.
#[derive(Debug, Clone)]
pub struct GitCommandInitializer {
    program: String,
}

impl GitCommandInitializer {
    pub fn new() -> Self {
        Self::with_program(GIT_PROGRAM)
    }

    /// Uses `program` instead of `git`.
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }
}

impl Default for GitCommandInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryInitializer for GitCommandInitializer {
    fn init_repository(&self, project_root: &Path) -> Result<()> {
        let path = project_root.display().to_string();
        log::debug!("Running '{} init' in '{}'", self.program, path);

        let output = Command::new(&self.program)
            .arg("init")
            .current_dir(project_root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::RepositoryInitError {
                path: path.clone(),
                reason: format!("failed to run '{}': {e}", self.program),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::RepositoryInitError {
                path,
                reason: format!(
                    "'{} init' finished with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        log::trace!("{}", String::from_utf8_lossy(&output.stdout).trim_end());
        Ok(())
    }
}
