#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use auqmia_client::{Gateway, Navigator, Notice, NoticeLevel, Notifier, Route, SessionDeps};
use auqmia_keystore::{CredentialStore, KeystoreError, MemoryCredentialStore};
use serde_json::{json, Value};

/// Records every navigation and notice the coordinator emits.
#[derive(Default)]
pub struct Recorder {
    routes: Mutex<Vec<(Route, bool)>>,
    notices: Mutex<Vec<Notice>>,
}

impl Recorder {
    pub fn routes(&self) -> Vec<(Route, bool)> {
        self.routes.lock().expect("routes").clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notices").clone()
    }

    pub fn count(&self, level: NoticeLevel) -> usize {
        self.notices()
            .iter()
            .filter(|notice| notice.level == level)
            .count()
    }
}

impl Navigator for Recorder {
    fn navigate(&self, route: Route, replace: bool) {
        self.routes.lock().expect("routes").push((route, replace));
    }
}

impl Notifier for Recorder {
    fn notify(&self, notice: Notice) {
        self.notices.lock().expect("notices").push(notice);
    }
}

/// Memory store that refuses writes to one key.
pub struct FailingStore {
    pub inner: MemoryCredentialStore,
    pub fail_on: &'static str,
}

impl CredentialStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeystoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeystoreError> {
        if key == self.fail_on {
            return Err(KeystoreError::Unavailable {
                message: "disk full".to_string(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), KeystoreError> {
        self.inner.remove(key)
    }
}

pub struct Harness {
    pub store: Arc<dyn CredentialStore>,
    pub recorder: Arc<Recorder>,
}

impl Harness {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            recorder: Arc::new(Recorder::default()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(MemoryCredentialStore::new()))
    }

    pub fn logged_in(token: &str, id: &str) -> Self {
        Self::new(Arc::new(MemoryCredentialStore::with_entries([
            ("token", token),
            ("id", id),
        ])))
    }

    pub fn deps(&self, base_url: &str) -> SessionDeps {
        SessionDeps {
            gateway: Gateway::new(reqwest::Client::new(), base_url),
            store: self.store.clone(),
            navigator: self.recorder.clone(),
            notifier: self.recorder.clone(),
        }
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).expect("store read")
    }
}

pub fn user_body(id: &str, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "address": { "state": "SP", "city": "Campinas", "district": "Centro" }
    })
}

pub fn animals_body(ids: &[u64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| json!({ "id": id, "name": format!("pet-{id}"), "species": "dog" }))
            .collect(),
    )
}
