use std::path::{Path, PathBuf};

use crate::constants::{EXECUTABLE_MODE, SHELL_SCRIPT_SUFFIX};
use crate::error::{Error, Result};
use crate::ioutils::{create_dir_all, set_mode, write_file};
use crate::renderer::TemplateRenderer;
use crate::types::{SubstitutionData, TemplateEntry};

use super::operation::Operation;
use super::store::TemplateStore;

/// Paths produced by a successful [`Materializer::materialize`] call,
/// relative to the project root and in the order they were handled.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Turns the template store and substitution data into files on disk.
pub struct Materializer<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    store: &'a TemplateStore,
}

impl<'a> Materializer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, store: &'a TemplateStore) -> Self {
        Self { engine, store }
    }

    /// Creates every directory of `project_tree` under `root`, then renders
    /// and writes every entry.
    ///
    /// Entries are independent of each other: each write creates its own
    /// parent directory, so no ordering between entries is required. The
    /// first failure is returned as is; whatever was written before it stays
    /// on disk.
    ///
    /// # Arguments
    /// * `root` - Project root; created if missing
    /// * `project_tree` - Directories relative to `root`
    /// * `entries` - Templates to render and where to put them
    /// * `data` - Values interpolated into every template
    pub fn materialize(
        &self,
        root: &Path,
        project_tree: &[&str],
        entries: &[TemplateEntry],
        data: &SubstitutionData,
    ) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();

        for dir in project_tree {
            self.create_directory(root, dir)?;
            report.directories.push(PathBuf::from(dir));
        }

        for entry in entries {
            self.write_entry(root, entry, data)?;
            report.files.push(PathBuf::from(entry.destination));
        }

        log::info!(
            "Materialized {} directories and {} files in '{}'",
            report.directories.len(),
            report.files.len(),
            root.display()
        );
        Ok(report)
    }

    fn create_directory(&self, root: &Path, dir: &str) -> Result<()> {
        let target = root.join(dir);
        let op = Operation::CreateDirectory { target_exists: target.is_dir(), target };
        log::debug!("{}", op.get_message());

        create_dir_all(op.target_path()).inspect_err(|e| {
            log::debug!("Failed to {}: {e}", op.error_context());
        })
    }

    /// Renders one entry and writes it below `root`, marking shell scripts
    /// executable once their content is in place.
    fn write_entry(
        &self,
        root: &Path,
        entry: &TemplateEntry,
        data: &SubstitutionData,
    ) -> Result<()> {
        let destination = Path::new(entry.destination);
        if destination.is_absolute() {
            return Err(Error::ValidationError(format!(
                "template destination '{}' must be relative",
                entry.destination
            )));
        }

        let target = root.join(destination);
        let op = Operation::Write {
            source: entry.source.to_string(),
            target_exists: target.exists(),
            target,
        };
        log::debug!("{}", op.get_message());

        let content = self
            .store
            .lookup(entry.source)
            .and_then(|template| self.engine.render(&template, data, Some(entry.source)))
            .map_err(|e| Error::GenerateError {
                path: entry.destination.to_string(),
                source: Box::new(e),
            });
        let result = content.and_then(|content| write_file(&content, op.target_path()));
        if let Err(e) = result {
            log::debug!("Failed to {}: {e}", op.error_context());
            return Err(e);
        }

        if is_shell_script(entry.destination) {
            let op = Operation::SetExecutable {
                target: op.target_path().clone(),
                mode: EXECUTABLE_MODE,
            };
            log::debug!("{}", op.get_message());
            set_mode(op.target_path(), EXECUTABLE_MODE).inspect_err(|e| {
                log::debug!("Failed to {}: {e}", op.error_context());
            })?;
        }

        Ok(())
    }
}

/// Whether `destination` names a shell script.
pub fn is_shell_script(destination: &str) -> bool {
    destination.ends_with(SHELL_SCRIPT_SUFFIX)
}
