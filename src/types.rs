//! Common types used across the genst crate.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

/// A template store key paired with the path, relative to the project root,
/// that its rendered output is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub source: &'static str,
    pub destination: &'static str,
}

impl TemplateEntry {
    pub const fn new(source: &'static str, destination: &'static str) -> Self {
        Self { source, destination }
    }
}

/// Values interpolated into every template of a run.
///
/// Serialized with PascalCase keys, so templates refer to `{{ ProjectName }}`
/// and `{{ ModuleName }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubstitutionData {
    pub project_name: String,
    pub module_name: String,
}

impl SubstitutionData {
    /// The module path is always the project name.
    pub fn for_project(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            module_name: project_name.to_string(),
        }
    }
}

/// Backend used to initialize the repository of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum VcsBackend {
    /// In-process libgit2.
    #[default]
    #[value(name = "libgit2")]
    LibGit2,
    /// The external `git` executable.
    Git,
}

impl Display for VcsBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VcsBackend::LibGit2 => "libgit2",
            VcsBackend::Git => "git",
        };
        write!(f, "{s}")
    }
}
