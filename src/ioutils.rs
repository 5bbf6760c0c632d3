use std::path::Path;

use crate::error::{Error, Result};

/// Creates `dest_path` and any missing ancestors. Existing directories are not an error.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|source| Error::DirectoryCreationError {
        path: dest_path.display().to_string(),
        source,
    })
}

/// Writes `content` to `dest_path`, creating the parent directory first and
/// truncating any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|source| Error::FileWriteError {
        path: dest_path.display().to_string(),
        source,
    })
}

/// Sets the unix permission bits of `path` to `mode`.
#[cfg(unix)]
pub fn set_mode<P: AsRef<Path>>(path: P, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    let permissions = std::fs::Permissions::from_mode(mode);
    std::fs::set_permissions(path, permissions).map_err(|source| {
        Error::PermissionChangeError { path: path.display().to_string(), source }
    })
}

/// Permission bits are not modelled outside unix; the file is left as written.
#[cfg(not(unix))]
pub fn set_mode<P: AsRef<Path>>(path: P, _mode: u32) -> Result<()> {
    log::debug!("Skipping permission change for '{}'", path.as_ref().display());
    Ok(())
}
