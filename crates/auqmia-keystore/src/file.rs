use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{CredentialStore, KeystoreError};

const CREDENTIALS_FILE: &str = "credentials.json";

/// Keeps every entry in one JSON object at `<root>/credentials.json`.
///
/// The whole file is rewritten on each change; the in-process lock only
/// serializes writers within this process.
pub struct FileCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(CREDENTIALS_FILE),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, KeystoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| KeystoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|err| KeystoreError::Corrupt {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    /// Writes through a sibling temp file renamed over the old one, so a
    /// crash never leaves a half-written credential file behind.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), KeystoreError> {
        let io_err = |source| KeystoreError::Io {
            path: self.path.clone(),
            source,
        };
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(io_err)?;
        let contents = serde_json::to_string_pretty(entries).map_err(|err| {
            KeystoreError::Internal {
                message: err.to_string(),
            }
        })?;

        let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(io_err)?;
        }
        file.write_all(contents.as_bytes()).map_err(io_err)?;
        file.as_file().sync_all().map_err(io_err)?;
        file.persist(&self.path).map_err(|err| io_err(err.error))?;
        Ok(())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, KeystoreError> {
        self.lock.lock().map_err(|_| KeystoreError::Internal {
            message: "failed to lock credential file".to_string(),
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError> {
        let _guard = self.guard()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError> {
        let _guard = self.guard()?;
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        debug!(key, path = %self.path.display(), "stored credential entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeystoreError> {
        let _guard = self.guard()?;
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)?;
        debug!(key, path = %self.path.display(), "removed credential entry");
        Ok(())
    }
}
