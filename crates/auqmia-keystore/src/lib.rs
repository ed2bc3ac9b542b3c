use std::path::{Path, PathBuf};
use std::sync::Arc;

mod file;
mod keychain;
mod memory;

pub use file::FileCredentialStore;
pub use keychain::KeyringCredentialStore;
pub use memory::MemoryCredentialStore;

#[derive(thiserror::Error, Debug)]
pub enum KeystoreError {
    #[error("credential store unavailable: {message}")]
    Unavailable { message: String },
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("credential file {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Durable string key-value storage for session credentials.
///
/// A missing key is a normal state and reads as `Ok(None)`; removing a key
/// that is not there succeeds.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError>;
    fn remove(&self, key: &str) -> Result<(), KeystoreError>;
}

pub const KEYRING_SERVICE: &str = "auqmia";

pub fn default_root() -> Result<PathBuf, KeystoreError> {
    let home = dirs::home_dir().ok_or_else(|| KeystoreError::Unavailable {
        message: "HOME is not set".to_string(),
    })?;
    Ok(home.join(".auqmia"))
}

pub fn default_store(root: &Path) -> Arc<dyn CredentialStore> {
    Arc::new(FileCredentialStore::new(root))
}
