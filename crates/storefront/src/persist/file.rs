//! On-disk storage medium: one JSON file per key.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::instrument;

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] backed by a directory.
///
/// Each key is stored as `<dir>/<key>.json`. Writes go to a temporary file
/// that is then renamed over the target, so a crash mid-write leaves either
/// the old value or the new one. Keys are restricted to ASCII letters, digits,
/// `_` and `-`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!("File store ready");
        Ok(Self { dir })
    }

    /// The directory holding the store's files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));

        let mut file = fs::File::create(&tmp)?;

        // a failed write must not leave the temp file behind
        let cleanup_and_err = |e: std::io::Error| {
            if let Err(remove_err) = fs::remove_file(&tmp) {
                tracing::warn!(
                    path = %tmp.display(),
                    error = %remove_err,
                    "Failed to remove temp file"
                );
            }
            StorageError::Io(e)
        };

        file.write_all(value.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);

        fs::rename(&tmp, &path).map_err(cleanup_and_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}
