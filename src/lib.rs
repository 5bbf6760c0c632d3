/// Handles argument parsing and drives project generation.
pub mod cli;

/// Compile-time project layout and process constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template rendering functionality.
pub mod renderer;

/// Embedded templates and project materialization.
pub mod template;

/// Types shared across modules.
pub mod types;

/// Local repository initialization.
pub mod vcs;
