//! Filesystem services used when saving

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, RubricError};

/// Filesystem operations performed around a save
pub trait FileServices {
    /// Create `dir` and any missing parents
    fn make_dir(&self, dir: &Path) -> Result<()>;

    /// Open `path` for writing, truncating existing content
    fn write_stream(&self, path: &Path) -> std::io::Result<Box<dyn Write>>;

    /// Normalize permissions of a freshly written file
    fn sanitize(&self, path: &Path) -> Result<()>;
}

/// Local filesystem with fixed permission modes.
///
/// Modes only apply on unix; elsewhere directories and files keep whatever
/// the platform gives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFiles {
    pub dir_mode: u32,
    pub file_mode: u32,
}

impl Default for LocalFiles {
    fn default() -> Self {
        LocalFiles {
            dir_mode: 0o770,
            file_mode: 0o660,
        }
    }
}

impl LocalFiles {
    pub fn new(dir_mode: u32, file_mode: u32) -> Self {
        LocalFiles {
            dir_mode,
            file_mode,
        }
    }
}

impl FileServices for LocalFiles {
    fn make_dir(&self, dir: &Path) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|e| {
            RubricError::write(dir, format!("failed to create directory: {}", e))
        })?;
        set_mode(dir, self.dir_mode).map_err(|e| {
            RubricError::write(dir, format!("failed to set directory permissions: {}", e))
        })
    }

    fn write_stream(&self, path: &Path) -> std::io::Result<Box<dyn Write>> {
        Ok(Box::new(File::create(path)?))
    }

    fn sanitize(&self, path: &Path) -> Result<()> {
        set_mode(path, self.file_mode).map_err(|e| RubricError::PermissionSanitize {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(path: &Path, _mode: u32) -> std::io::Result<()> {
    fs::metadata(path).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_make_dir_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("rubrics").join("code");
        LocalFiles::default().make_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // second call is a no-op
        LocalFiles::default().make_dir(&nested).unwrap();
    }

    #[test]
    fn test_sanitize_missing_file_is_permission_error() {
        let dir = tempdir().unwrap();
        let err = LocalFiles::default()
            .sanitize(&dir.path().join("missing.grd"))
            .unwrap_err();
        assert!(matches!(err, RubricError::PermissionSanitize { .. }));
        assert!(err.is_non_fatal());
    }

    #[cfg(unix)]
    #[test]
    fn test_sanitize_applies_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("report.grd");
        fs::write(&path, "x").unwrap();
        LocalFiles::new(0o750, 0o640).sanitize(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
