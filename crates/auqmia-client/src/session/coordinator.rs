use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use auqmia_core::{
    Animal, LoginRequest, LoginResponse, RegistrationInput, User, UserPatch, TOKEN_KEY,
    USER_ID_KEY,
};
use auqmia_keystore::{CredentialStore, KeystoreError};
use tracing::{debug, info, warn};

use super::messages;
use super::ports::{Navigator, Notice, Notifier, Route};
use super::state::{SessionPhase, SessionSnapshot, SessionState, UiFlags};
use crate::catalog::CatalogAccessor;
use crate::error::ClientError;
use crate::gateway::{bearer_header, Gateway};
use crate::profile::ProfileAccessor;

pub struct SessionDeps {
    pub gateway: Gateway,
    pub store: Arc<dyn CredentialStore>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

/// Single owner of the client session.
///
/// All session writes go through these methods. The state lock is never held
/// across an await; work that outlives a login or logout is dropped by
/// comparing session generations.
pub struct SessionCoordinator {
    gateway: Gateway,
    catalog: CatalogAccessor,
    profile: ProfileAccessor,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<SessionState>,
}

enum ProfileOutcome {
    Loaded(User),
    Rejected(ClientError),
    Failed(ClientError),
    MissingId,
}

impl SessionCoordinator {
    pub fn new(deps: SessionDeps) -> Self {
        let SessionDeps {
            gateway,
            store,
            navigator,
            notifier,
        } = deps;
        Self {
            catalog: CatalogAccessor::new(gateway.clone()),
            profile: ProfileAccessor::new(gateway.clone()),
            gateway,
            store,
            navigator,
            notifier,
            state: Mutex::new(SessionState::new()),
        }
    }

    /// Builds the coordinator and re-hydrates the session from the store.
    pub async fn start(deps: SessionDeps) -> Self {
        let coordinator = Self::new(deps);
        coordinator.bootstrap().await;
        coordinator
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state().snapshot()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state().phase
    }

    pub fn is_logged(&self) -> bool {
        self.state().is_logged()
    }

    pub fn loading(&self) -> bool {
        self.state().loading
    }

    pub fn user(&self) -> Option<User> {
        self.state().user.clone()
    }

    pub fn animals(&self) -> Vec<Animal> {
        self.state().animals.clone()
    }

    pub fn flags(&self) -> UiFlags {
        self.state().flags
    }

    pub fn set_login_button(&self, value: bool) {
        self.state().flags.login_button = value;
    }

    pub fn set_donation_button(&self, value: bool) {
        self.state().flags.donation_button = value;
    }

    pub fn set_adopted(&self, value: bool) {
        self.state().flags.adopted = value;
    }

    pub fn set_modal_update_user(&self, value: bool) {
        self.state().flags.modal_update_user = value;
    }

    /// Runs once; later calls return without touching anything.
    pub async fn bootstrap(&self) {
        {
            let mut state = self.state();
            if state.bootstrapped {
                return;
            }
            state.bootstrapped = true;
        }

        let token = match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|value| !value.trim().is_empty()),
            Err(err) => {
                warn!(event = "credential_read_failed", key = TOKEN_KEY, error = %err);
                None
            }
        };

        match token {
            Some(token) => self.resume(token).await,
            None => {
                info!(event = "session_bootstrap", outcome = "anonymous");
                self.refresh_quietly().await;
            }
        }

        self.state().loading = false;
    }

    async fn resume(&self, token: String) {
        if let Err(err) = self.gateway.set_token(&token) {
            warn!(event = "session_bootstrap", outcome = "invalid_token", error = %err);
            self.discard_session();
            self.refresh_quietly().await;
            return;
        }

        let generation = {
            let mut state = self.state();
            state.phase = SessionPhase::Authenticating;
            state.token = Some(token);
            state.generation
        };

        let user_id = match self.store.get(USER_ID_KEY) {
            Ok(id) => id,
            Err(err) => {
                warn!(event = "credential_read_failed", key = USER_ID_KEY, error = %err);
                None
            }
        };

        let profile = async {
            let Some(id) = user_id.as_deref() else {
                return ProfileOutcome::MissingId;
            };
            match self.profile.current_user(id).await {
                Ok(user) => ProfileOutcome::Loaded(user),
                Err(err) if err.is_auth() => ProfileOutcome::Rejected(err),
                Err(err) => ProfileOutcome::Failed(err),
            }
        };
        let (outcome, ()) = tokio::join!(profile, self.refresh_quietly());

        if self.state().generation != generation {
            debug!(event = "session_bootstrap", "session changed during startup; dropping result");
            return;
        }

        match outcome {
            ProfileOutcome::Rejected(err) => {
                warn!(event = "session_bootstrap", outcome = "token_rejected", error = %err);
                self.discard_session();
                return;
            }
            ProfileOutcome::Failed(err) => {
                warn!(event = "profile_fetch_failed", error = %err);
            }
            ProfileOutcome::MissingId => {
                warn!(event = "profile_fetch_skipped", "no stored user id");
            }
            ProfileOutcome::Loaded(user) => {
                self.state().user = Some(user);
            }
        }

        self.state().phase = SessionPhase::Authenticated;
        info!(event = "session_bootstrap", outcome = "resumed");
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), ClientError> {
        let response = match self.profile.login(credentials).await {
            Ok(response) => response,
            Err(err) => {
                warn!(event = "login_failed", error = %err);
                self.notifier.notify(Notice::failure(messages::LOGIN_FAILED));
                return Err(err);
            }
        };
        let LoginResponse { user, access_token } = response;
        let user_id = user.id.to_string();

        if let Err(err) = self.commit_login(&access_token, &user_id) {
            warn!(event = "login_not_persisted", error = %err);
            self.notifier.notify(Notice::failure(messages::LOGIN_NOT_SAVED));
            return Err(err);
        }

        self.state().begin_session(access_token, user);
        info!(event = "login_succeeded", user_id = %user_id);
        self.notifier.notify(Notice::success(messages::LOGIN_SUCCEEDED));
        self.navigator.navigate(Route::Profile, true);
        Ok(())
    }

    /// Validates and persists the new credential, then points the gateway at
    /// it. On failure the store is put back to what it held before, so an
    /// existing session keeps its saved credential.
    fn commit_login(&self, token: &str, user_id: &str) -> Result<(), ClientError> {
        bearer_header(token)?;
        let prior_token = self.store.get(TOKEN_KEY)?;
        self.store.set(TOKEN_KEY, token)?;
        if let Err(err) = self.store.set(USER_ID_KEY, user_id) {
            if let Err(cleanup) = self.restore_entry(TOKEN_KEY, prior_token) {
                warn!(event = "credential_restore_failed", key = TOKEN_KEY, error = %cleanup);
            }
            return Err(err.into());
        }
        self.gateway.set_token(token)
    }

    fn restore_entry(&self, key: &str, prior: Option<String>) -> Result<(), KeystoreError> {
        match prior {
            Some(value) => self.store.set(key, &value),
            None => self.store.remove(key),
        }
    }

    /// Leaves for the landing screen and ends the session everywhere: store,
    /// gateway and in-memory state.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.navigator.navigate(Route::Landing, false);
        self.gateway.clear_token();
        self.state().end_session();
        info!(event = "logout");
        self.forget_credentials().map_err(ClientError::from)
    }

    pub fn open_login(&self) {
        self.navigator.navigate(Route::Login, false);
    }

    pub async fn register(&self, input: RegistrationInput) -> Result<(), ClientError> {
        let payload = input.normalize();
        match self.profile.register(&payload).await {
            Ok(()) => {
                info!(event = "register_succeeded");
                self.notifier
                    .notify(Notice::success(messages::REGISTER_SUCCEEDED));
                self.navigator.navigate(Route::Login, true);
                Ok(())
            }
            Err(err) => {
                warn!(event = "register_failed", error = %err);
                self.notifier.notify(Notice::failure(messages::REGISTER_FAILED));
                Err(err)
            }
        }
    }

    pub async fn update_user(&self, patch: &UserPatch) -> Result<User, ClientError> {
        let (generation, logged, known_id) = {
            let state = self.state();
            let id = state.user.as_ref().map(|user| user.id.to_string());
            (state.generation, state.is_logged(), id)
        };
        let user_id = match (logged, known_id) {
            (false, _) => None,
            (true, Some(id)) => Some(id),
            (true, None) => self.store.get(USER_ID_KEY).unwrap_or_else(|err| {
                warn!(event = "credential_read_failed", key = USER_ID_KEY, error = %err);
                None
            }),
        };

        let Some(user_id) = user_id else {
            self.notifier.notify(Notice::failure(messages::UPDATE_FAILED));
            return Err(ClientError::Unauthenticated);
        };

        match self.profile.update_user(&user_id, patch).await {
            Ok(user) => {
                {
                    let mut state = self.state();
                    if state.generation != generation {
                        debug!(event = "profile_update_dropped", "session changed during update");
                        return Err(ClientError::Superseded);
                    }
                    state.user = Some(user.clone());
                    state.flags.modal_update_user = false;
                }
                info!(event = "profile_updated", user_id = %user_id);
                self.notifier
                    .notify(Notice::success(messages::UPDATE_SUCCEEDED));
                Ok(user)
            }
            Err(err) => {
                warn!(event = "profile_update_failed", error = %err);
                self.notifier.notify(Notice::failure(messages::UPDATE_FAILED));
                Err(err)
            }
        }
    }

    /// Deletes through the gateway, then re-reads the catalog whether or not
    /// the server accepted the delete. Nothing is sent, and nothing is
    /// refreshed, without a session or for an id that is not a path segment.
    pub async fn delete_animal(&self, id: &str) -> Result<(), ClientError> {
        let outcome = self.catalog.delete_animal(id).await;
        if matches!(
            outcome,
            Err(ClientError::Unauthenticated | ClientError::InvalidId(_))
        ) {
            return outcome;
        }
        match &outcome {
            Err(err) => warn!(event = "animal_delete_failed", animal_id = %id, error = %err),
            Ok(()) => info!(event = "animal_deleted", animal_id = %id),
        }
        self.refresh_quietly().await;
        outcome
    }

    /// Replaces the in-memory catalog with the server's list. Failures are
    /// logged and returned, never shown to the user.
    pub async fn refresh_animals(&self) -> Result<(), ClientError> {
        let ticket = self.state().issue_catalog_ticket();
        match self.catalog.list_animals().await {
            Ok(animals) => {
                let count = animals.len();
                if self.state().apply_catalog(ticket, animals) {
                    debug!(event = "catalog_refreshed", count);
                } else {
                    debug!(event = "catalog_refresh_dropped", ticket, "newer catalog already applied");
                }
                Ok(())
            }
            Err(err) => {
                warn!(event = "catalog_refresh_failed", error = %err);
                Err(err)
            }
        }
    }

    async fn refresh_quietly(&self) {
        let _ = self.refresh_animals().await;
    }

    fn discard_session(&self) {
        self.gateway.clear_token();
        self.state().end_session();
        if let Err(err) = self.forget_credentials() {
            warn!(event = "credential_cleanup_failed", error = %err);
        }
    }

    fn forget_credentials(&self) -> Result<(), KeystoreError> {
        let token = self.store.remove(TOKEN_KEY);
        let id = self.store.remove(USER_ID_KEY);
        token.and(id)
    }
}
