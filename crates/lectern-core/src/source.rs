use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::APP_DIR_NAME;
use crate::error::{LecternError, Result};

/// Something that can ask the user for one PDF file.
///
/// `None` means the user cancelled, which callers treat as a no-op.
pub trait FilePicker {
    fn pick_pdf(&self) -> Option<PathBuf>;
}

/// Reusable reference to a user-selected file.
///
/// Holds enough metadata to describe the file without reading it, and can be
/// persisted so the same file can be reopened after a restart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub path: PathBuf,
    pub name: String,
    pub len: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_secs: Option<u64>,
}

impl FileHandle {
    /// Resolve `path` to a handle. Fails if the file is missing or unreadable.
    pub fn open(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(LecternError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            )));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let modified_secs = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            len: meta.len(),
            modified_secs,
        })
    }

    /// Re-read the bytes behind this handle.
    ///
    /// A file that vanished or is no longer accessible is reported as
    /// [`LecternError::StaleHandle`]; the caller should ask the user to open
    /// it again.
    pub fn reopen(&self) -> Result<Vec<u8>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => {
                if bytes.len() as u64 != self.len {
                    debug!(
                        path = %self.path.display(),
                        old_len = self.len,
                        new_len = bytes.len(),
                        "File changed since it was opened"
                    );
                }
                Ok(bytes)
            }
            Err(e) => Err(self.classify(e.into())),
        }
    }

    /// Handle describing the file as it is now.
    pub fn refreshed(&self) -> Result<Self> {
        Self::open(&self.path).map_err(|e| self.classify(e))
    }

    /// A file that is gone or no longer readable makes the handle stale.
    fn classify(&self, err: LecternError) -> LecternError {
        match err {
            LecternError::Io(io_err)
                if matches!(
                    io_err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                LecternError::StaleHandle(self.path.clone())
            }
            other => other,
        }
    }
}

/// Persists the most recently opened handle across restarts.
pub struct HandleStore {
    path: PathBuf,
}

impl HandleStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<platform data dir>/lectern/last_handle.toml`.
    pub fn at_default_location() -> Result<Self> {
        dirs::data_dir()
            .map(|dir| Self::new(dir.join(APP_DIR_NAME).join("last_handle.toml")))
            .ok_or(LecternError::NoPlatformDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, handle: &FileHandle) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents =
            toml::to_string(handle).map_err(|e| LecternError::Config(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// The stored handle, or `None` if nothing was saved or the record is unreadable.
    pub fn load(&self) -> Option<FileHandle> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match toml::from_str(&contents) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupt handle record");
                None
            }
        }
    }

    pub fn remove(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> FileHandle {
        FileHandle {
            path: PathBuf::from("/papers/revoked.pdf"),
            name: "revoked.pdf".into(),
            len: 10,
            modified_secs: None,
        }
    }

    #[test]
    fn test_denied_and_missing_files_are_stale() {
        let h = handle();
        for kind in [io::ErrorKind::NotFound, io::ErrorKind::PermissionDenied] {
            let err = h.classify(io::Error::from(kind).into());
            assert!(matches!(err, LecternError::StaleHandle(ref p) if p == &h.path), "{kind:?}");
        }
    }

    #[test]
    fn test_other_io_errors_pass_through() {
        let err = handle().classify(io::Error::from(io::ErrorKind::InvalidInput).into());
        assert!(matches!(err, LecternError::Io(_)));
    }
}
