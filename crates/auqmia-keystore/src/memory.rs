use std::collections::HashMap;
use std::sync::Mutex;

use crate::{CredentialStore, KeystoreError};

#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|map| map.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, KeystoreError> {
        self.entries.lock().map_err(|_| KeystoreError::Internal {
            message: "failed to lock credential store".to_string(),
        })
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError> {
        Ok(self.locked()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError> {
        self.locked()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeystoreError> {
        self.locked()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() -> Result<(), KeystoreError> {
        let store = MemoryCredentialStore::with_entries([("id", "7")]);
        assert_eq!(store.get("token")?, None);
        store.set("token", "tok")?;
        assert_eq!(store.get("token")?.as_deref(), Some("tok"));
        assert_eq!(store.len(), 2);
        store.remove("token")?;
        store.remove("token")?;
        store.remove("id")?;
        assert!(store.is_empty());
        Ok(())
    }
}
