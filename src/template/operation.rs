use std::path::PathBuf;

/// A single filesystem action performed while materializing a project.
#[derive(Debug)]
pub enum Operation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { source: String, target: PathBuf, target_exists: bool },
    SetExecutable { target: PathBuf, mode: u32 },
    InitRepository { target: PathBuf },
}

impl Operation {
    /// Returns the target path for this operation.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            Operation::CreateDirectory { target, .. } => target,
            Operation::Write { target, .. } => target,
            Operation::SetExecutable { target, .. } => target,
            Operation::InitRepository { target } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    ///
    /// # Returns
    /// * `String` - A concise description including the operation type and paths
    pub fn error_context(&self) -> String {
        match self {
            Operation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            Operation::Write { source, target, .. } => {
                format!("render '{}' -> '{}'", source, target.display())
            }
            Operation::SetExecutable { target, .. } => {
                format!("make '{}' executable", target.display())
            }
            Operation::InitRepository { target } => {
                format!("initialize repository in '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            Operation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!("Directory '{}' already exists", target.display())
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }
            Operation::Write { source, target, target_exists } => {
                if *target_exists {
                    format!(
                        "Rendering '{}' to '{}' (overwriting existing file)",
                        source,
                        target.display()
                    )
                } else {
                    format!("Rendering '{}' to '{}'", source, target.display())
                }
            }
            Operation::SetExecutable { target, mode } => {
                format!("Setting mode {:o} on '{}'", mode, target.display())
            }
            Operation::InitRepository { target } => {
                format!("Initializing repository in '{}'", target.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_directory_reports_existing() {
        let target = PathBuf::from("/tmp/myapp/config");
        let op =
            Operation::CreateDirectory { target: target.clone(), target_exists: true };
        assert_eq!(
            op.get_message(),
            format!("Directory '{}' already exists", target.display())
        );
    }

    #[test]
    fn create_directory_message_when_missing() {
        let target = PathBuf::from("/tmp/myapp/config");
        let op =
            Operation::CreateDirectory { target: target.clone(), target_exists: false };
        assert_eq!(
            op.get_message(),
            format!("Creating directory '{}'", target.display())
        );
    }

    #[test]
    fn write_operation_overwrite_message() {
        let target = PathBuf::from("/tmp/myapp/go.mod");
        let op = Operation::Write {
            source: "templates/go.mod.tmpl".to_string(),
            target: target.clone(),
            target_exists: true,
        };
        assert_eq!(
            op.get_message(),
            format!(
                "Rendering 'templates/go.mod.tmpl' to '{}' (overwriting existing file)",
                target.display()
            )
        );
    }

    #[test]
    fn set_executable_message_shows_octal_mode() {
        let op = Operation::SetExecutable {
            target: PathBuf::from("/tmp/myapp/scripts/start.sh"),
            mode: 0o755,
        };
        assert_eq!(op.get_message(), "Setting mode 755 on '/tmp/myapp/scripts/start.sh'");
    }

    #[test]
    fn error_context_for_write_includes_source_and_target() {
        let op = Operation::Write {
            source: "templates/Makefile".to_string(),
            target: PathBuf::from("/out/Makefile"),
            target_exists: false,
        };
        let context = op.error_context();
        assert!(context.contains("templates/Makefile"));
        assert!(context.contains("/out/Makefile"));
    }

    #[test]
    fn target_path_for_every_variant() {
        let target = PathBuf::from("/out");
        let ops = [
            Operation::CreateDirectory { target: target.clone(), target_exists: false },
            Operation::Write {
                source: String::new(),
                target: target.clone(),
                target_exists: false,
            },
            Operation::SetExecutable { target: target.clone(), mode: 0o755 },
            Operation::InitRepository { target: target.clone() },
        ];
        for op in &ops {
            assert_eq!(op.target_path(), &target);
        }
    }
}
