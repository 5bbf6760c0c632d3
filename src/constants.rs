//! Constants used throughout genst

use crate::types::TemplateEntry;

/// Directories every generated project contains, relative to the project root.
pub const PROJECT_TREE: &[&str] = &[
    "cmd/server",
    "internal/api",
    "internal/config",
    "internal/middleware",
    "internal/model",
    "internal/service",
    "pkg/logger",
    "pkg/database",
    "config",
    "scripts",
];

/// Template store keys and the project-relative paths they are rendered to.
pub const TEMPLATE_ENTRIES: &[TemplateEntry] = &[
    TemplateEntry::new("templates/scripts/start.sh", "scripts/start.sh"),
    TemplateEntry::new("templates/Makefile", "Makefile"),
    TemplateEntry::new("templates/config/config.yaml", "config/config.yaml"),
    TemplateEntry::new("templates/server/main.go.tmpl", "cmd/server/main.go"),
    TemplateEntry::new("templates/internal/api/router.go.tmpl", "internal/api/router.go"),
    TemplateEntry::new(
        "templates/internal/config/config.go.tmpl",
        "internal/config/config.go",
    ),
    TemplateEntry::new("templates/pkg/logger/logger.go.tmpl", "pkg/logger/logger.go"),
    TemplateEntry::new("templates/pkg/database/db.go.tmpl", "pkg/database/db.go"),
    TemplateEntry::new("templates/README.md", "README.md"),
    TemplateEntry::new("templates/go.mod.tmpl", "go.mod"),
    TemplateEntry::new("templates/.gitignore.tmpl", ".gitignore"),
    TemplateEntry::new(
        "templates/.github/workflows/ci.yml.tmpl",
        ".github/workflows/ci.yml",
    ),
];

/// Destinations with this suffix are made executable after they are written
pub const SHELL_SCRIPT_SUFFIX: &str = ".sh";

/// rwxr-xr-x
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Executable used by the external repository initializer
pub const GIT_PROGRAM: &str = "git";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
