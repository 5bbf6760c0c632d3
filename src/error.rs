use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents validation failures in user input.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Failed to create directory '{path}'. Original error: {source}")]
    DirectoryCreationError { path: String, source: std::io::Error },

    /// The embedded template store has no entry for the requested key.
    /// Only reachable through an inconsistent build.
    #[error("Template '{name}' is not present in the template store.")]
    TemplateLookupError { name: String },

    #[error("Template '{name}' is not valid UTF-8. Original error: {source}")]
    TemplateEncodingError { name: String, source: std::str::Utf8Error },

    #[error("Failed to render template '{name}'. Original error: {source}")]
    TemplateSyntaxError { name: String, source: minijinja::Error },

    /// Lookup or render failure for the template written to `path`.
    #[error("Failed to generate '{path}': {source}")]
    GenerateError { path: String, source: Box<Error> },

    #[error("Failed to write '{path}'. Original error: {source}")]
    FileWriteError { path: String, source: std::io::Error },

    #[error("Failed to change permissions of '{path}'. Original error: {source}")]
    PermissionChangeError { path: String, source: std::io::Error },

    #[error("Failed to initialize repository in '{path}': {reason}")]
    RepositoryInitError { path: String, reason: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
