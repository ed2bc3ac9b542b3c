use keyring::Entry;
use tracing::{debug, warn};

use crate::{CredentialStore, KeystoreError, KEYRING_SERVICE};

/// One OS keychain entry per key, all under the same service name.
pub struct KeyringCredentialStore {
    service: String,
}

impl KeyringCredentialStore {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, KeystoreError> {
        Entry::new(&self.service, key).map_err(|err| KeystoreError::Unavailable {
            message: format!("failed to access keyring: {err}"),
        })
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new(KEYRING_SERVICE)
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(KeystoreError::Internal {
                message: format!("failed to load '{key}' from keychain: {err}"),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|err| KeystoreError::Internal {
                message: format!("failed to store '{key}' in keychain: {err}"),
            })?;
        debug!(key, service = %self.service, "stored credential entry in keyring");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeystoreError> {
        match self.entry(key)?.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => {
                warn!(key, service = %self.service, "failed to delete credential entry: {err}");
                Err(KeystoreError::Internal {
                    message: format!("failed to delete '{key}' from keychain: {err}"),
                })
            }
        }
    }
}
