use crate::constants::verbosity;
use crate::types::VcsBackend;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Generate a new Go HTTP server project with common components and best
/// practices pre-configured.
#[derive(Parser, Debug)]
#[command(name = "genst", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project.
    New(NewArgs),
}

/// Arguments of `genst new`.
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Name of the project; also used as the Go module path.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Directory in which the project directory is created.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// How the repository of the new project is initialized.
    #[arg(long, value_enum, default_value_t = VcsBackend::LibGit2)]
    pub vcs: VcsBackend,
}

/// Parse command line arguments, exiting with a usage error when they are invalid.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
