use crate::{
    cli::NewArgs,
    constants::{PROJECT_TREE, TEMPLATE_ENTRIES},
    error::{Error, Result},
    ioutils::create_dir_all,
    renderer::{new_renderer, TemplateRenderer},
    template::{operation::Operation, Materializer, TemplateStore},
    types::SubstitutionData,
    vcs::{get_initializer, RepositoryInitializer},
};
use std::path::{Path, PathBuf};

/// Main CLI runner that orchestrates the entire project generation workflow
pub struct Runner {
    project_name: String,
    parent_dir: PathBuf,
    engine: Box<dyn TemplateRenderer>,
    store: TemplateStore,
    initializer: Box<dyn RepositoryInitializer>,
}

impl Runner {
    pub fn new(args: NewArgs) -> Self {
        Self {
            project_name: args.project_name,
            parent_dir: args.path,
            engine: Box::new(new_renderer()),
            store: TemplateStore::embedded(),
            initializer: get_initializer(args.vcs),
        }
    }

    /// Replaces the embedded template store.
    pub fn with_store(mut self, store: TemplateStore) -> Self {
        self.store = store;
        self
    }

    /// Replaces the repository initializer selected from the arguments.
    pub fn with_initializer(
        mut self,
        initializer: Box<dyn RepositoryInitializer>,
    ) -> Self {
        self.initializer = initializer;
        self
    }

    /// Executes the complete project generation workflow and returns the
    /// project root.
    ///
    /// Stops at the first failure. Nothing written before the failure is
    /// removed, and running again over the same directory overwrites the
    /// generated files.
    pub fn run(self) -> Result<PathBuf> {
        validate_project_name(&self.project_name)?;

        let project_root = self.parent_dir.join(&self.project_name);
        self.create_project_root(&project_root)?;

        let data = SubstitutionData::for_project(&self.project_name);

        let materializer = Materializer::new(self.engine.as_ref(), &self.store);
        let report = materializer.materialize(
            &project_root,
            PROJECT_TREE,
            TEMPLATE_ENTRIES,
            &data,
        )?;
        log::debug!("Generated files: {:?}", report.files);

        self.init_repository(&project_root)?;

        println!("Successfully created project {}", self.project_name);
        Ok(project_root)
    }

    fn create_project_root(&self, project_root: &Path) -> Result<()> {
        log::info!(
            "Creating project '{}' in '{}'",
            self.project_name,
            project_root.display()
        );
        create_dir_all(project_root)
    }

    fn init_repository(&self, project_root: &Path) -> Result<()> {
        let op = Operation::InitRepository { target: project_root.to_path_buf() };
        log::info!("{}", op.get_message());
        self.initializer.init_repository(project_root).inspect_err(|e| {
            log::debug!("Failed to {}: {e}", op.error_context());
        })
    }
}

/// Rejects names that cannot name a project directory.
pub fn validate_project_name(project_name: &str) -> Result<()> {
    if project_name.trim().is_empty() {
        return Err(Error::ValidationError("project name must not be empty".to_string()));
    }
    if project_name.contains('\0') {
        return Err(Error::ValidationError(
            "project name must not contain NUL bytes".to_string(),
        ));
    }
    Ok(())
}

/// Main entry point for `genst new`
pub fn run(args: NewArgs) -> Result<PathBuf> {
    let runner = Runner::new(args);
    runner.run()
}
